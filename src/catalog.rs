// ===== aimforge/src/catalog.rs =====
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::consts::SEARCH_RESULT_LIMIT;
use crate::device::DeviceInfo;
use crate::error::{AfResult, AimForgeError};

/// The device database the calculators resolve names against.
/// Ships with a built-in set; a user CSV can replace it wholesale.
#[derive(Debug, Clone)]
pub struct DeviceCatalog {
    devices: Vec<DeviceInfo>,
}

fn dev(
    name: &str,
    brand: &str,
    screen: f32,
    refresh: u32,
    touch: u32,
    cpu: f32,
    gpu: f32,
    ram: f32,
    year: i32,
) -> DeviceInfo {
    DeviceInfo {
        name: name.to_string(),
        brand: Some(brand.to_string()),
        screen_size: screen,
        refresh_rate: refresh,
        touch_sampling_rate: touch,
        processor_score: cpu,
        gpu_score: gpu,
        ram: Some(ram),
        release_year: Some(year),
    }
}

impl DeviceCatalog {
    pub fn builtin() -> Self {
        let devices = vec![
            dev("iPhone 15 Pro", "Apple", 6.1, 120, 240, 98.0, 97.0, 8.0, 2023),
            dev("iPhone 15", "Apple", 6.1, 60, 120, 95.0, 93.0, 6.0, 2023),
            dev("iPhone 13", "Apple", 6.1, 60, 120, 88.0, 86.0, 4.0, 2021),
            dev("iPad Pro 12.9", "Apple", 12.9, 120, 240, 99.0, 98.0, 8.0, 2022),
            dev("Samsung Galaxy S24 Ultra", "Samsung", 6.8, 120, 240, 97.0, 96.0, 12.0, 2024),
            dev("Samsung Galaxy A54", "Samsung", 6.4, 120, 180, 68.0, 65.0, 8.0, 2023),
            dev("Google Pixel 8 Pro", "Google", 6.7, 120, 240, 90.0, 88.0, 12.0, 2023),
            dev("Google Pixel 7a", "Google", 6.1, 90, 180, 82.0, 79.0, 8.0, 2023),
            dev("OnePlus 12", "OnePlus", 6.82, 120, 240, 96.0, 95.0, 16.0, 2024),
            dev("Xiaomi 14", "Xiaomi", 6.36, 120, 240, 95.0, 94.0, 12.0, 2024),
            dev("Redmi Note 12", "Xiaomi", 6.67, 120, 240, 58.0, 55.0, 6.0, 2023),
            dev("ROG Phone 8", "Asus", 6.78, 165, 720, 98.0, 97.0, 16.0, 2024),
            dev("Sony Xperia 1 V", "Sony", 6.5, 120, 240, 92.0, 90.0, 12.0, 2023),
            dev("Oppo Find X6", "Oppo", 6.74, 120, 240, 93.0, 91.0, 12.0, 2023),
            dev("Vivo X90 Pro", "Vivo", 6.78, 120, 300, 92.0, 90.0, 12.0, 2023),
            dev("Huawei P60 Pro", "Huawei", 6.67, 120, 300, 85.0, 80.0, 8.0, 2023),
            dev("Realme GT 5", "Realme", 6.74, 144, 360, 94.0, 92.0, 12.0, 2023),
        ];
        Self { devices }
    }

    pub fn from_devices(devices: Vec<DeviceInfo>) -> Self {
        Self { devices }
    }

    /// Loads a catalog CSV with columns:
    /// name,brand,screenSize,refreshRate,touchSamplingRate,processorScore,gpuScore,ram,releaseYear
    /// Malformed rows are skipped, not fatal; ram/releaseYear may be empty.
    pub fn load_csv<P: AsRef<Path>>(path: P) -> AfResult<Self> {
        debug!("Loading device catalog from: {}", path.as_ref().display());
        let file = File::open(path.as_ref())?;
        Self::load_csv_from_reader(file)
    }

    pub fn load_csv_from_reader<R: Read>(reader: R) -> AfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let mut devices = Vec::new();
        let mut skipped = 0usize;

        for result in rdr.records() {
            let rec = match result {
                Ok(rec) => rec,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            if rec.len() < 7 {
                skipped += 1;
                continue;
            }

            let name = rec[0].trim().to_string();
            if name.is_empty() {
                skipped += 1;
                continue;
            }
            let brand = match rec[1].trim() {
                "" => None,
                b => Some(b.to_string()),
            };

            let parsed = (
                rec[2].trim().parse::<f32>(),
                rec[3].trim().parse::<u32>(),
                rec[4].trim().parse::<u32>(),
                rec[5].trim().parse::<f32>(),
                rec[6].trim().parse::<f32>(),
            );
            let (screen, refresh, touch, cpu, gpu) = match parsed {
                (Ok(s), Ok(r), Ok(t), Ok(c), Ok(g)) => (s, r, t, c, g),
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            // Trailing optional columns
            let ram = rec.get(7).and_then(|v| v.trim().parse::<f32>().ok());
            let release_year = rec.get(8).and_then(|v| v.trim().parse::<i32>().ok());

            devices.push(DeviceInfo {
                name,
                brand,
                screen_size: screen,
                refresh_rate: refresh,
                touch_sampling_rate: touch,
                processor_score: cpu,
                gpu_score: gpu,
                ram,
                release_year,
            });
        }

        debug!(
            "Catalog parsed: {} devices loaded, {} rows skipped.",
            devices.len(),
            skipped
        );

        if devices.is_empty() {
            return Err(AimForgeError::Validation(
                "Catalog contains no usable device rows".to_string(),
            ));
        }

        Ok(Self { devices })
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn devices(&self) -> &[DeviceInfo] {
        &self.devices
    }

    /// Case-insensitive exact name lookup.
    pub fn get(&self, name: &str) -> Option<&DeviceInfo> {
        let needle = name.trim().to_lowercase();
        self.devices
            .iter()
            .find(|d| d.name.to_lowercase() == needle)
    }

    /// Exact lookup, falling back to the first substring hit.
    pub fn resolve(&self, name: &str) -> Option<&DeviceInfo> {
        self.get(name)
            .or_else(|| self.search(name).into_iter().next())
    }

    /// Substring name search, capped at `SEARCH_RESULT_LIMIT` hits.
    pub fn search(&self, query: &str) -> Vec<&DeviceInfo> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.devices
            .iter()
            .filter(|d| d.name.to_lowercase().contains(&needle))
            .take(SEARCH_RESULT_LIMIT)
            .collect()
    }

    /// All devices whose brand field equals `brand` (case-insensitive).
    pub fn by_brand(&self, brand: &str) -> Vec<&DeviceInfo> {
        let needle = brand.trim().to_lowercase();
        self.devices
            .iter()
            .filter(|d| {
                d.brand
                    .as_deref()
                    .is_some_and(|b| b.to_lowercase() == needle)
            })
            .collect()
    }
}

impl Default for DeviceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
