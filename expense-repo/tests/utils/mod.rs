pub mod generator;

use expense_repo::Repos;
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use std::fs;
use std::str::FromStr;

#[derive(Deserialize)]
struct TestConfig {
    database_url: String,
}

#[allow(dead_code)]
#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

pub fn build_repos(repo_type: RepoType) -> Repos {
    match repo_type {
        RepoType::SQLx => {
            let config = fs::read_to_string("config_test.toml").unwrap();
            let config: TestConfig = toml::from_str(config.as_str()).unwrap();
            let connect_options = PgConnectOptions::from_str(&config.database_url).unwrap();
            expense_repo::sqlx_repo::create_repos(connect_options, 1)
        }
        RepoType::Mem => expense_repo::mem_repo::create_repos(),
    }
}
