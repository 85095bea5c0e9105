use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Drivecheck survey definition

[survey]
title = "Test Drive Performance Check"

# One block per question. scale is "slider" (0-10) or "likert" (1-5);
# polarity "inverted" means a lower raw answer is the better one.
[[questions]]
key = "energy"

[[questions]]
key = "focus"
polarity = "inverted"

[[questions]]
key = "motivation"

[[questions]]
key = "confidence"

[[questions]]
key = "recovery"

[[questions]]
key = "mood"

[[questions]]
key = "appearance"

[classifier]
low = 60
high = 80
# "higher-is-better" (performance framing) or "higher-is-worse" (symptom burden)
polarity = "higher-is-better"
# "inclusive": a score exactly at a cut-point lands in the better tier
boundary = "inclusive"

[comparison]
# age window (±years) for --from-records
window = 5
bucketing = "tier"

# Static comparison table; add one block per age range.
# [[comparison.brackets]]
# min = 51
# max = 55
# buckets = [
#     { label = "peak", value = 12 },
#     { label = "tuning", value = 30 },
#     { label = "reignite", value = 18 },
# ]

[store]
format = "csv"
path = "submissions.csv"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
