use aimforge::device::{
    classify_device, device_score, performance_score, performance_tier, DeviceBucket, DeviceInfo,
    PerformanceTier,
};
use rstest::rstest;

fn device(name: &str, brand: Option<&str>) -> DeviceInfo {
    DeviceInfo {
        name: name.to_string(),
        brand: brand.map(|b| b.to_string()),
        screen_size: 6.5,
        refresh_rate: 120,
        touch_sampling_rate: 240,
        processor_score: 80.0,
        gpu_score: 80.0,
        ram: Some(8.0),
        release_year: Some(2023),
    }
}

// --- PLATFORM DETECTION ---
#[rstest]
#[case("iPhone 15 Pro", None, DeviceBucket::Apple)]
#[case("IPHONE SE", None, DeviceBucket::Apple)] // case-insensitive
#[case("iPad Pro 12.9", None, DeviceBucket::Apple)]
#[case("Some Handset", Some("Apple"), DeviceBucket::Apple)]
#[case("iPhone 15 (import)", Some("samsung"), DeviceBucket::Apple)] // platform beats brand
#[case("Some Handset", Some("not-apple"), DeviceBucket::Android)] // brand match is exact
fn test_apple_detection(
    #[case] name: &str,
    #[case] brand: Option<&str>,
    #[case] expected: DeviceBucket,
) {
    assert_eq!(classify_device(&device(name, brand)), expected);
}

// --- ANDROID BRAND BUCKETS ---
#[rstest]
#[case("Galaxy S24 Ultra", Some("Samsung"), DeviceBucket::Samsung)]
#[case("Pixel 8 Pro", Some("Google"), DeviceBucket::Google)]
#[case("OnePlus 12", None, DeviceBucket::OnePlus)] // brand token in the name
#[case("Xiaomi 14", None, DeviceBucket::Xiaomi)]
#[case("Find X6", Some("OPPO"), DeviceBucket::Oppo)]
#[case("X90 Pro", Some("vivo"), DeviceBucket::Vivo)]
#[case("P60 Pro", Some("HUAWEI"), DeviceBucket::Huawei)]
#[case("GT 5", Some("realme"), DeviceBucket::Realme)]
#[case("ROG Phone 8", Some("ASUS"), DeviceBucket::Asus)]
#[case("Xperia 1 V", Some("Sony"), DeviceBucket::Sony)]
#[case("Unbranded Slab", Some("Generic"), DeviceBucket::Android)]
#[case("Mystery Phone", None, DeviceBucket::Android)]
fn test_android_buckets(
    #[case] name: &str,
    #[case] brand: Option<&str>,
    #[case] expected: DeviceBucket,
) {
    assert_eq!(classify_device(&device(name, brand)), expected);
}

#[test]
fn test_scan_order_resolves_multi_token_names() {
    // "samsung" is scanned before "oneplus"
    let d = device("Samsung x OnePlus collab", None);
    assert_eq!(classify_device(&d), DeviceBucket::Samsung);
}

// --- SCORE SATURATION ---
#[rstest]
#[case(50.0, 50.0, 50.0)]
#[case(1000.0, 50.0, 75.0)] // over-scale clamps to 100
#[case(-20.0, 60.0, 30.0)] // negative clamps to 0
#[case(f32::NAN, 80.0, 40.0)] // NaN collapses to 0
#[case(f32::INFINITY, f32::NEG_INFINITY, 0.0)] // both non-finite
fn test_performance_score_saturation(#[case] cpu: f32, #[case] gpu: f32, #[case] expected: f32) {
    let mut d = device("Test", None);
    d.processor_score = cpu;
    d.gpu_score = gpu;
    assert_eq!(performance_score(&d), expected);
}

// --- TIER LABELS ---
#[rstest]
#[case(30.0, PerformanceTier::Budget)]
#[case(59.9, PerformanceTier::Budget)]
#[case(60.0, PerformanceTier::MidRange)]
#[case(74.9, PerformanceTier::MidRange)]
#[case(75.0, PerformanceTier::HighEnd)]
#[case(89.9, PerformanceTier::HighEnd)]
#[case(90.0, PerformanceTier::Flagship)]
#[case(100.0, PerformanceTier::Flagship)]
fn test_performance_tier_cutoffs(#[case] score: f32, #[case] expected: PerformanceTier) {
    let mut d = device("Test", None);
    d.processor_score = score;
    d.gpu_score = score;
    assert_eq!(performance_tier(&d), expected);
}

#[test]
fn test_device_score_is_bounded() {
    let maxed = DeviceInfo {
        name: "Maxed".to_string(),
        screen_size: 40.0,
        refresh_rate: 2000,
        touch_sampling_rate: 4000,
        processor_score: 500.0,
        gpu_score: 500.0,
        ..Default::default()
    };
    assert_eq!(device_score(&maxed), 100);

    let zeroed = DeviceInfo {
        name: "Zeroed".to_string(),
        ..Default::default()
    };
    assert_eq!(device_score(&zeroed), 0);
}
