use crate::domain::models::Platform;

pub fn detect_platform() -> Platform {
    platform_from_os(std::env::consts::OS)
}

pub fn platform_from_os(os: &str) -> Platform {
    match os {
        "linux" => Platform::Linux,
        "windows" => Platform::Windows,
        _ => Platform::Other,
    }
}
