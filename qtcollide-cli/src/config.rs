use qtcollide::io::svg::SvgDrawOptions;
use qtcollide::util::QTConfig;
use serde::{Deserialize, Serialize};

/// Configuration of the command-line driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct CliConfig {
    /// Configuration of the quadtree the scene is indexed in
    #[serde(default)]
    pub qt_config: QTConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: CliConfig =
            serde_json::from_str(r#"{"qt_config": {"max_depth": 3, "max_entries_per_leaf": 4}}"#)
                .unwrap();
        assert_eq!(config.qt_config.max_depth, 3);
        assert_eq!(config.qt_config.max_entries_per_leaf, 4);
        assert_eq!(config.svg_draw_options, SvgDrawOptions::default());

        let config: CliConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.qt_config, QTConfig::default());
    }
}
