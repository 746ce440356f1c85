use clap::Parser;
use homescope::core::categories;
use homescope::output;
use homescope::utils::error::ErrorSeverity;
use homescope::utils::{logger, validation::Validate};
use homescope::{
    CliConfig, GoogleMapsClient, HomeScopeError, OutputFormat, SearchOutcome, SearchSession,
    TomlConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    if config.list_categories {
        for name in categories::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    tracing::info!("Starting homescope CLI");

    if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        let merged = TomlConfig::from_file(&path).and_then(|file| config.merge_file(file));
        if let Err(e) = merged {
            eprintln!("❌ Failed to load config file '{}': {}", path, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
    tracing::debug!(
        "Search: address={:?} location={:?} categories={:?}",
        config.address,
        config.location,
        config.categories
    );

    // API 金鑰由配置注入，呼叫時不再讀取環境變數
    let client = GoogleMapsClient::from_config(&config);
    let session = SearchSession::new(client.clone(), client);

    let outcome = match (&config.address, config.location) {
        (Some(address), _) => session.search_address(address, &config.categories).await,
        (None, Some(origin)) => session.search_location(origin, &config.categories).await,
        (None, None) => Err(HomeScopeError::validation(
            "Either --address or --location is required",
        )),
    };

    let result = match outcome {
        Ok(SearchOutcome::Current(result)) => result,
        Ok(SearchOutcome::Superseded { generation, latest }) => {
            tracing::warn!("Search #{} was superseded by #{}", generation, latest);
            return Ok(());
        }
        Err(e) => exit_with(e),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = match config.format {
        OutputFormat::Table => output::write_table(&mut out, &result),
        OutputFormat::Json => output::write_json(&mut out, &result),
        OutputFormat::Csv => output::write_csv(&mut out, &result.landmarks),
    };
    if let Err(e) = written {
        exit_with(e);
    }

    Ok(())
}

fn exit_with(e: HomeScopeError) -> ! {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ Search failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 上游錯誤，可重試
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
