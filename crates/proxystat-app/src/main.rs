//! # proxystat-app
//!
//! PROXYSTAT CLI 진입점.
//! 설정을 로드하고 stats 서비스를 한 번 조회해 envelope를 stdout에 출력한다.
//! 로그는 stderr로만 나간다.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use proxystat_core::config::AppConfig;
use proxystat_core::config_manager::ConfigManager;
use proxystat_network::grpc::{GrpcConfig, StatsQueryClient};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// 프록시 stats 서비스 조회 도구
///
/// 시스템 통계와 트래픽 카운터를 한 번 조회해 JSON으로 출력한다.
#[derive(Parser, Debug)]
#[command(name = "proxystat")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// stats 서비스 주소 (예: 127.0.0.1:10085)
    #[arg(long, short = 'e', env = "PROXYSTAT_ENDPOINT")]
    endpoint: Option<String>,

    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리의 config.json)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 조회 데드라인 (초)
    #[arg(long)]
    deadline: Option<u64>,

    /// 들여쓰기해서 출력
    #[arg(long)]
    pretty: bool,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "warn")]
    log_level: String,
}

/// 설정 파일 로드 후 CLI 인자로 덮어쓰기
///
/// `--config`가 없으면 기본 경로를 읽기만 하고 파일을 만들지 않는다.
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let manager = match &args.config {
        Some(path) => Some(
            ConfigManager::with_path(path.clone())
                .with_context(|| format!("설정 파일 로드 실패: {}", path.display()))?,
        ),
        None => match ConfigManager::open_default() {
            Ok(manager) => Some(manager),
            Err(e) => {
                warn!(error = %e, "기본 설정 파일 사용 불가, 기본값으로 진행");
                None
            }
        },
    };

    let mut config = match &manager {
        Some(manager) => {
            debug!(path = %manager.config_path().display(), "설정 로드 완료");
            manager.get()
        }
        None => AppConfig::default_config(),
    };

    apply_overrides(&mut config, args);
    config.validate().context("설정 검증 실패")?;
    Ok(config)
}

fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(endpoint) = &args.endpoint {
        config.grpc.endpoint = endpoint.clone();
    }
    if let Some(deadline) = args.deadline {
        config.grpc.deadline_secs = deadline;
    }
    if args.pretty {
        config.output.pretty = true;
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let log_filter = format!(
        "proxystat={},proxystat_core={},proxystat_network={}",
        args.log_level, args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&args)?;
    debug!(endpoint = %config.grpc.endpoint, deadline_secs = config.grpc.deadline_secs, "stats 조회 시작");

    let client = StatsQueryClient::new(GrpcConfig::from(&config.grpc));
    let envelope = client.query(&config.grpc.endpoint).await;

    if config.output.pretty {
        println!("{}", envelope.to_json_pretty());
    } else {
        println!("{}", envelope.to_json());
    }

    Ok(if envelope.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("인자 파싱 실패")
    }

    #[test]
    fn overrides_replace_file_values() {
        let args = parse(&[
            "proxystat",
            "--endpoint",
            "10.0.0.2:9999",
            "--deadline",
            "7",
            "--pretty",
        ]);
        let mut config = AppConfig::default_config();
        apply_overrides(&mut config, &args);

        assert_eq!(config.grpc.endpoint, "10.0.0.2:9999");
        assert_eq!(config.grpc.deadline_secs, 7);
        assert!(config.output.pretty);
    }

    #[test]
    fn no_overrides_keep_file_values() {
        let args = parse(&["proxystat"]);
        let mut config = AppConfig::default_config();
        config.grpc.endpoint = "192.168.0.1:1234".to_string();
        apply_overrides(&mut config, &args);

        assert_eq!(config.grpc.endpoint, "192.168.0.1:1234");
        assert_eq!(config.grpc.deadline_secs, 3);
        assert!(!config.output.pretty);
    }

    #[test]
    fn explicit_config_path_is_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"grpc":{"endpoint":"127.0.0.1:4321","deadline_secs":2}}"#)
            .unwrap();

        let args = parse(&["proxystat", "--config", path.to_str().unwrap()]);
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.grpc.endpoint, "127.0.0.1:4321");
        assert_eq!(config.grpc.deadline_secs, 2);
    }

    #[test]
    fn zero_deadline_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let args = parse(&[
            "proxystat",
            "--config",
            path.to_str().unwrap(),
            "--deadline",
            "0",
        ]);
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn oversized_deadline_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let args = parse(&[
            "proxystat",
            "--config",
            path.to_str().unwrap(),
            "--deadline",
            "18446744073709551615",
        ]);
        let err = resolve_config(&args).unwrap_err();
        assert!(format!("{err:#}").contains("grpc.deadline_secs"));
    }
}
