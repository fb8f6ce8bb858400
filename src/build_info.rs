//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_date_format() {
        // YYYY-MM-DD from the build script, or an override from CI
        assert_eq!(BUILD_DATE.len(), 10);
    }
}
