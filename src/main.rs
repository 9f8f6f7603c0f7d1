use clap::Parser;
use report_courier::config::Command;
use report_courier::utils::{logger, validation::Validate};
use report_courier::{delivery_service, CliConfig, CourierConfig, CourierError, ReportChain};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config.command) {
        tracing::error!("❌ {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(command: Command) -> Result<(), CourierError> {
    match command {
        Command::Report {
            source,
            layers,
            steps,
            json,
        } => {
            let chain = ReportChain::with_layers(source, layers);
            print_report(&chain, steps, json)
        }
        Command::Deliver { service, order_ids } => {
            for order_id in &order_ids {
                deliver(&service, order_id)?;
            }
            Ok(())
        }
        Command::Run { config } => {
            tracing::info!("📁 Loading configuration from: {}", config);
            execute(&CourierConfig::from_file(&config)?)
        }
        Command::Demo => execute(&CourierConfig::demo()?),
    }
}

fn print_report(chain: &ReportChain, steps: bool, json: bool) -> Result<(), CourierError> {
    tracing::info!(
        "Generating {} report with {} layer(s)",
        chain.source(),
        chain.depth()
    );

    let outputs = if steps {
        chain.steps()
    } else {
        vec![chain.generate()]
    };

    if json {
        let document = serde_json::json!({
            "source": chain.source(),
            "layers": chain.layers(),
            "outputs": outputs,
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        for output in outputs {
            println!("{}", output);
        }
    }
    Ok(())
}

fn deliver(selector: &str, order_id: &str) -> Result<(), CourierError> {
    let service = delivery_service(selector)?;
    println!("{}", service.deliver_order(order_id)?);
    println!("{}", service.delivery_status(order_id)?);
    Ok(())
}

fn execute(config: &CourierConfig) -> Result<(), CourierError> {
    config.validate()?;

    if let (Some(chain), Some(section)) = (config.report_chain(), &config.report) {
        print_report(&chain, section.print_steps, false)?;
    }
    for job in &config.deliveries {
        deliver(&job.service, &job.order_id)?;
    }
    Ok(())
}
