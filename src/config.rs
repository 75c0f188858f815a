//! 全局配置管理,存储所有可配置项

/// 全局配置
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalConfig {
    // 整数分组分隔符（1,234,567）
    pub group_separator: char,
    // 序列化快照时是否附带原始存档数据
    pub include_raw: bool,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            group_separator: ',',
            include_raw: true,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn group_separator(mut self, separator: char) -> Self {
        self.config.group_separator = separator;
        self
    }

    pub fn include_raw(mut self, include_raw: bool) -> Self {
        self.config.include_raw = include_raw;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = ConfigManager::custom()
            .group_separator('.')
            .include_raw(false)
            .verbose(true)
            .build();

        assert_eq!(config.group_separator, '.');
        assert!(!config.include_raw);
        assert!(config.verbose);
        assert_eq!(ConfigManager::get_default(), GlobalConfig::default());
    }
}
