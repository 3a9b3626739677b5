use clap::ValueEnum;
use salary_scraper::{headhunter::DEFAULT_USER_AGENT, HeadHunter, SearchSource, SuperJob};
use thiserror::Error;

const SUPERJOB_API_KEY: &str = "SUPERJOB_API_KEY";
const HH_USER_AGENT: &str = "HH_USER_AGENT";

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} not set")]
    MissingVar(&'static str),
    #[error("Failed to set up client: '{0}'")]
    Client(#[from] salary_scraper::Error),
}

/// Job boards that can be queried
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Site {
    Headhunter,
    Superjob,
}

#[derive(Debug, Default)]
pub struct Config {
    superjob_api_key: Option<String>,
    hh_user_agent: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value: &String| !value.trim().is_empty());
        Self {
            superjob_api_key: read(SUPERJOB_API_KEY),
            hh_user_agent: read(HH_USER_AGENT),
        }
    }

    /// Build the client for `site`, failing if its credentials are missing
    pub fn source(&self, site: Site) -> Result<Box<dyn SearchSource>, Error> {
        match site {
            Site::Headhunter => {
                let user_agent = self.hh_user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
                Ok(Box::new(HeadHunter::new(user_agent)?))
            }
            Site::Superjob => {
                let api_key = self
                    .superjob_api_key
                    .as_deref()
                    .ok_or(Error::MissingVar(SUPERJOB_API_KEY))?;
                Ok(Box::new(SuperJob::new(api_key)?))
            }
        }
    }
}
