use anyhow::Result;

pub struct Config {
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_addr: std::env::var("FEEDECAY_BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8090".into()),
        })
    }
}
