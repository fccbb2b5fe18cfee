// ==========================================
// IC-CSC 分类计算器 - 命令行入口
// ==========================================
// 宿主界面的最小替身: 收集四轴取值 -> 调用 API -> 输出代码与建议
// ==========================================

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use ic_csc::api::{AxisOptionsInfo, ClassificationApi, ClassificationResponse, ClassifyRequest};
use ic_csc::config::{EngineConfig, InputMode};
use ic_csc::domain::types::Axis;
use ic_csc::{i18n, logging};

#[derive(Parser, Debug)]
#[command(name = "ic-csc", version, about = "IC-CSC classification calculator (T-A-E-R)")]
struct Cli {
    /// Output language (en, es, zh-CN); overrides IC_CSC_LOCALE
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one T-A-E-R selection
    Classify {
        #[arg(long, short = 't', default_value = "T0")]
        temporal: String,
        #[arg(long, short = 'a', default_value = "A0")]
        activity: String,
        #[arg(long, short = 'e', default_value = "E0")]
        extension: String,
        #[arg(long, short = 'r', default_value = "R0")]
        risk: String,
        /// Accept full labels such as "T0 (Acute)"
        #[arg(long)]
        labels: bool,
    },
    /// List the selectable options per axis
    Options {
        /// temporal | activity | extension | risk (or T/A/E/R)
        #[arg(long)]
        axis: Option<String>,
    },
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    tracing::debug!("{} v{}", ic_csc::APP_NAME, ic_csc::VERSION);

    let mut config = EngineConfig::from_env()?;
    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
    }

    match cli.command {
        Command::Classify {
            temporal,
            activity,
            extension,
            risk,
            labels,
        } => {
            if labels {
                config.input_mode = InputMode::Label;
            }
            let api = ClassificationApi::new(config)?;
            let request = ClassifyRequest::new(&temporal, &activity, &extension, &risk);
            let response = api.classify(&request)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_response(&response);
            }
        }
        Command::Options { axis } => {
            let api = ClassificationApi::new(config)?;
            let infos = match axis {
                Some(name) => {
                    let axis = Axis::from_name(&name)
                        .ok_or_else(|| anyhow!("unknown axis: {}", name))?;
                    vec![api.list_axis_options(axis, None)?]
                }
                None => api.list_all_options(None)?,
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&infos)?);
            } else {
                print_options(&infos);
            }
        }
    }

    Ok(())
}

fn print_response(response: &ClassificationResponse) {
    let locale = response.locale.as_str();
    println!("{}", i18n::t("ui.title", locale));
    println!("{}: {}", i18n::t("ui.code", locale), response.code);
    println!("---");
    println!("{}", i18n::t("ui.recommendations", locale));
    for rec in &response.recommendations {
        println!("- [{}] {}", rec.severity, rec.text);
    }
    println!("---");
    println!("{}", response.disclaimer);
}

fn print_options(infos: &[AxisOptionsInfo]) {
    for info in infos {
        println!("{}", info.title);
        for option in &info.options {
            let marker = if option.code == info.default_code { "*" } else { " " };
            println!("  {} {}", marker, option.label);
        }
    }
}
