use std::{collections::HashMap, path::Path};

use anyhow::{ensure, Context, Result};
use hocon::{Hocon, HoconLoader};
use log::debug;

/// Reads settings from a HOCON document. A setting is looked up in the environment first (upper cased), then under
/// `scope`, then at the top level of the document.
#[derive(Debug)]
pub struct ConfigLoader {
    hocon: Hocon,
    env: HashMap<String, String>,
    scope: String,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>, scope: String) -> Result<Self> {
        let path = path.as_ref();
        ensure!(path.is_file(), "The config file {:?} was not found", path);

        let hocon = HoconLoader::new()
            .load_file(path)
            .with_context(|| format!("Failed to find or load config file at: {:?}", path))?
            .hocon()?;

        debug!("Loaded config from {:?} with scope '{}'", path, scope);

        Ok(Self::from_hocon(hocon, std::env::vars().collect(), scope))
    }

    pub fn from_string(s: &str, scope: String) -> Result<Self> {
        let hocon = HoconLoader::new()
            .load_str(s)
            .context("Failed to parse config")?
            .hocon()?;

        Ok(Self::from_hocon(hocon, std::env::vars().collect(), scope))
    }

    fn from_hocon(hocon: Hocon, env: HashMap<String, String>, scope: String) -> Self {
        Self { hocon, env, scope }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.env.get(&name.to_uppercase()) {
            return Some(Value::String(value.clone()));
        }

        let scope = &self.hocon[self.scope.as_str()];
        if matches!(scope, Hocon::Hash(_)) {
            if let Some(value) = Self::map_hocon(scope, name) {
                return Some(value);
            }
        }

        Self::map_hocon(&self.hocon, name)
    }

    pub fn load<T: Config>(&self) -> Result<T> {
        T::load(self)
    }

    fn map_hocon(hocon: &Hocon, name: &str) -> Option<Value> {
        match &hocon[name] {
            Hocon::Real(f64) => Some(Value::Float(*f64 as f32)),
            Hocon::Integer(i64) => usize::try_from(*i64).ok().map(Value::Integer),
            Hocon::String(string) => Some(Value::String(string.clone())),
            Hocon::Boolean(bool) => Some(Value::Boolean(*bool)),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(usize),
    Float(f32),
    Boolean(bool),
}

impl Value {
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Integer(val) => Some(*val),
            Value::String(val) => val.parse::<usize>().ok(),
            _ => None,
        }
    }
}

pub trait Config {
    fn load(config: &ConfigLoader) -> Result<Self>
    where
        Self: Sized;
}
