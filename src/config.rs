use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

pub const DEFAULT_POSTS_DIR: &str = "posts";
pub const DEFAULT_OUTPUT_FILE: &str = "posts.json";
pub const CFG_FILE_NAME: &str = "post-index.toml";

const EXE_DIR_VAR: &str = "${exe_dir}";

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub output_file: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            posts_dir: PathBuf::from(DEFAULT_POSTS_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Log {
    pub level: LogLevel,
    #[serde(default)]
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: Paths,
    pub log: Option<Log>,
}

fn default_log_location() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("post-index").join("log").join("build.log"))
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    let Some(str_path) = path.to_str() else {
        return Ok(path);
    };
    if !str_path.starts_with(EXE_DIR_VAR) {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent().ok_or(io::Error::new(
        ErrorKind::NotFound, "Could not find the executable directory"))?;
    Ok(PathBuf::from(str_path.replacen(EXE_DIR_VAR, &exe_dir.to_string_lossy(), 1)))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir)?,
        output_file: parse_path(cfg.paths.output_file)?,
    };

    if let Some(ref mut log) = cfg.log {
        log.location = match log.location.take() {
            Some(location) => Some(parse_path(location)?),
            None => default_log_location(),
        };
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

fn get_config_path() -> Option<PathBuf> {
    let cfg_path = env::current_dir().ok()?.join(CFG_FILE_NAME);
    cfg_path.exists().then_some(cfg_path)
}

/// Reads `cfg_path` when given, otherwise post-index.toml in the current
/// directory. Without either the built-in defaults are used.
pub fn open_config(cfg_path: Option<PathBuf>) -> io::Result<Config> {
    match cfg_path.or_else(get_config_path) {
        Some(path) => read_config(&path),
        None => Ok(Config::default()),
    }
}
