use strum_macros::{Display, EnumString};

/// A mini-program runtime dialect. Decides the directive name prefix of the
/// generated markup as well as the artifact extensions of the emitted files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MiniPlatform {
    #[default]
    Weapp,
    Swan,
    Alipay,
    Tt,
    Jd,
}

impl MiniPlatform {
    /// Resolves a platform id. Unknown ids fall back to the default platform
    /// instead of failing: the compiler favors best-effort output over a hard
    /// failure for unrecognized configuration.
    pub fn from_id(id: &str) -> MiniPlatform {
        id.parse().unwrap_or_default()
    }

    /// The short token prefixed to the platform's markup directives.
    pub fn directive_prefix(self) -> &'static str {
        match self {
            MiniPlatform::Weapp => "wx",
            MiniPlatform::Swan => "s",
            MiniPlatform::Alipay => "a",
            MiniPlatform::Tt => "tt",
            MiniPlatform::Jd => "jd",
        }
    }

    pub fn markup_extension(self) -> &'static str {
        match self {
            MiniPlatform::Weapp => ".wxml",
            MiniPlatform::Swan => ".swan",
            MiniPlatform::Alipay => ".axml",
            MiniPlatform::Tt => ".ttml",
            MiniPlatform::Jd => ".jxml",
        }
    }

    pub fn style_extension(self) -> &'static str {
        match self {
            MiniPlatform::Weapp => ".wxss",
            MiniPlatform::Swan => ".css",
            MiniPlatform::Alipay => ".acss",
            MiniPlatform::Tt => ".ttss",
            MiniPlatform::Jd => ".jxss",
        }
    }

    pub const fn config_extension() -> &'static str {
        ".json"
    }

    pub const fn script_extension() -> &'static str {
        ".js"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_platform_ids() {
        assert_eq!(MiniPlatform::from_id("weapp").directive_prefix(), "wx");
        assert_eq!(MiniPlatform::from_id("swan").directive_prefix(), "s");
        assert_eq!(MiniPlatform::from_id("alipay").directive_prefix(), "a");
        assert_eq!(MiniPlatform::from_id("tt").directive_prefix(), "tt");
        assert_eq!(MiniPlatform::from_id("jd").directive_prefix(), "jd");
    }

    #[test]
    fn unknown_platform_falls_back_to_default() {
        assert_eq!(MiniPlatform::from_id("quickapp"), MiniPlatform::Weapp);
        assert_eq!(MiniPlatform::from_id(""), MiniPlatform::Weapp);
    }

    #[test]
    fn platform_ids_are_case_insensitive() {
        assert_eq!(MiniPlatform::from_id("WEAPP"), MiniPlatform::Weapp);
        assert_eq!(MiniPlatform::from_id("Alipay"), MiniPlatform::Alipay);
    }

    #[test]
    fn artifact_extensions_follow_the_platform() {
        assert_eq!(MiniPlatform::Weapp.markup_extension(), ".wxml");
        assert_eq!(MiniPlatform::Weapp.style_extension(), ".wxss");
        assert_eq!(MiniPlatform::Alipay.markup_extension(), ".axml");
        assert_eq!(MiniPlatform::config_extension(), ".json");
        assert_eq!(MiniPlatform::script_extension(), ".js");
    }
}
