//! hostwatch - host resource monitor
//!
//! Polls CPU load, RAM usage and CPU temperature and posts a webhook alert
//! when one of them stays above its threshold.

use hostwatch::alerts::{AlertManager, NotificationDispatcher, PolicyConfig, WebhookNotifier};
use hostwatch::config::{env, Config, ConfigBuilder};
use hostwatch::error::{AppError, ConfigError, Result};
use hostwatch::sampler::SystemSampler;
use hostwatch::services::{AlertService, Monitor, MonitorConfig};

fn main() {
    // A missing .env file is fine; variables may come from the real environment
    let dotenv = dotenvy::dotenv();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Ok(path) = dotenv {
        log::debug!("Loaded environment from {}", path.display());
    }

    if let Err(e) = run() {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config_path = env::process_env(env::CONFIG_PATH);
    let config = ConfigBuilder::new()
        .with_file(config_path.as_deref())?
        .with_env(env::process_env)?
        .build()?;

    print_banner(&config);

    let policy = PolicyConfig {
        thresholds: config.threshold_config(),
        cooldown: config.schedule.alert_cooldown().duration,
    };
    let notifier = WebhookNotifier::new(&config.webhook)?;
    let dispatcher = NotificationDispatcher::spawn(notifier)?;
    let alerts = AlertService::new(AlertManager::new(policy), dispatcher);

    let sampler = SystemSampler::new();
    log::debug!("CPU: {}", sampler.cpu());

    let monitor_config = MonitorConfig {
        interval: config.schedule.check_interval().duration,
    };
    Monitor::new(monitor_config, sampler, alerts).run();

    Ok(())
}

fn print_banner(config: &Config) {
    let t = &config.thresholds;
    log::info!("hostwatch started");
    log::info!("Monitoring CPU, RAM, and Temperature usage...");
    log::info!(
        "CPU Threshold: {}%, RAM Threshold: {}%, Temp Threshold: {}°C",
        t.cpu_percent,
        t.ram_percent,
        t.temp_celsius
    );
    log::info!("Check Interval: {}", config.schedule.check_interval());
    log::info!("Alert Cooldown: {}", config.schedule.alert_cooldown());

    if !config.webhook.is_configured() {
        log::warn!("Webhook URL is not set. Notifications will be skipped.");
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    if let AppError::Config(ConfigError::InvalidValue { key, .. }) = err {
        eprintln!();
        eprintln!("Hint: check '{}' in your environment or .env file.", key);
    }
}
