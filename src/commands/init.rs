use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# Blueprint complexity configuration

[weights]
base_entry_weight = 1.0
branch_weight = 2.0
select_weight = 1.0
loop_weight = 3.0
latent_weight = 2.0
function_call_weight = 1.0
math_node_weight = 1.0
nesting_penalty = 1.0

[display]
# Raw score that maps to 100%
percent_scale = 100.0
light_green = 30.0
green = 60.0
orange = 80.0
red = 100.0

[dashboard]
threshold = 60.0
package_prefix = "/Game"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_at(&PathBuf::from(CONFIG_FILE_NAME), force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
