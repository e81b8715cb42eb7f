use anyhow::Result;
use mybatis_log_converter::cli::{CliArgs, USAGE, render_output};
use mybatis_log_converter::config::Config;
use mybatis_log_converter::input::read_log_text;
use mybatis_log_converter::mybatis::LogConverter;

fn main() -> Result<()> {
    let args = CliArgs::from_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = args.load_config()?;
    init_logging_from(&config)?;

    let text = read_log_text(args.input.as_deref())?;
    let converter = LogConverter::new(config.converter.clone());
    let result = converter.convert(&text);
    let output = render_output(&result, config.output.format)?;
    if !output.is_empty() {
        println!("{output}");
    }

    if !result.success {
        if let Some(err) = &result.error {
            eprintln!("{err}");
        }
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(feature = "logging")]
fn init_logging_from(config: &Config) -> Result<()> {
    use mybatis_log_converter::logging::{LogConfig, init_logging, parse_level};

    if !config.log.enabled {
        return Ok(());
    }
    let mut log_config = LogConfig::new().level(parse_level(&config.log.level)?);
    if let Some(dir) = &config.log.log_dir {
        log_config = log_config.log_dir(dir);
    }
    init_logging(log_config)?;
    Ok(())
}

#[cfg(not(feature = "logging"))]
fn init_logging_from(_config: &Config) -> Result<()> {
    Ok(())
}
