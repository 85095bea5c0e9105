mod core;
mod loader;

pub use core::{
    AgeBracket, BoundaryRule, BucketValue, ClassifierConfig, ComparisonConfig, QuestionConfig,
    ScorePolarity, StoreConfig, StoreFormat, SurveyConfig, SurveyMeta, TierMessages,
};
pub use loader::{load_config, parse_and_validate_config, CONFIG_FILE_NAME};
