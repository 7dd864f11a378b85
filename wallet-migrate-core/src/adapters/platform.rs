//! Platform to shared-library filename mapping

use crate::domain::result::{Error, Result};

/// Resolve the platform-specific filename for a native library stem,
/// e.g. `mysqlstorage` -> `libmysqlstorage.so` on Linux.
///
/// An unsupported platform fails here, before any load attempt is made.
pub fn shared_library_name(stem: &str, os: &str) -> Result<String> {
    let (prefix, suffix) = match os {
        "linux" => ("lib", ".so"),
        "macos" => ("lib", ".dylib"),
        "windows" => ("", ".dll"),
        other => return Err(Error::plugin(format!("OS isn't supported: {other}"))),
    };
    Ok(format!("{prefix}{stem}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_name() {
        assert_eq!(
            shared_library_name("mysqlstorage", "linux").unwrap(),
            "libmysqlstorage.so"
        );
    }

    #[test]
    fn test_macos_name() {
        assert_eq!(
            shared_library_name("mysqlstorage", "macos").unwrap(),
            "libmysqlstorage.dylib"
        );
    }

    #[test]
    fn test_windows_name_has_no_prefix() {
        assert_eq!(
            shared_library_name("mysqlstorage", "windows").unwrap(),
            "mysqlstorage.dll"
        );
    }

    #[test]
    fn test_unsupported_platform_names_the_platform() {
        let err = shared_library_name("mysqlstorage", "freebsd").unwrap_err();
        assert!(matches!(err, Error::PluginLoad(_)));
        assert!(err.to_string().contains("freebsd"));
    }
}
