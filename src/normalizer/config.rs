use crate::Labels;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NormalizerConfig {
    /// Added to every metric reported by the normalizer
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl NormalizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[cfg(test)]
mod test {
    use crate::normalizer::config::NormalizerConfig;
    use crate::Labels;

    #[test]
    fn test_builder() {
        let config = NormalizerConfig::new().labels(Labels::new(&[("source", "import")]));
        assert_eq!(config.labels, Labels::new(&[("source", "import")]));
    }

    #[test]
    fn test_deserialize() {
        let config: NormalizerConfig =
            serde_json::from_str(r#"{"labels": {"source": "import"}}"#).unwrap();
        assert_eq!(config.labels, Labels::new(&[("source", "import")]));

        let config: NormalizerConfig = serde_json::from_str(r#"{"labels": null}"#).unwrap();
        assert_eq!(config, NormalizerConfig::default());

        let config: NormalizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NormalizerConfig::default());
    }
}
