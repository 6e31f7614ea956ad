use gantry_rs::resolver::ResolutionRequest;

#[tokio::main]
async fn main() {
	env_logger::init();

	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag("h", "help",     "Show help");
		opts.optflag("q", "quiet",    "Don't report search progress");
		opts.optflag("g", "global",   "Resolve module install paths to the global modules directory");
		opts.optopt( "p", "platform", "Comma-separated platforms to resolve for", "PLATFORMS");
		opts.optopt( "a", "action",   "Action hint forwarded to the registry",    "ACTION");
		opts.parsing_style(getopts::ParsingStyle::FloatingFrees);

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { println!("Unable to parse options: {}", e); return }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage("Usage: gantry <resolve|info> <id>[@<version>] [options]"));
			return;
		}

		parsed_options
	};

	let config = gantry_rs::GantryRsConfig::load_from_disk().unwrap_or_else(|e| {
		log::warn!("Failed to read config file: {}", e);
		log::warn!("Using default config.");
		gantry_rs::GantryRsConfig::default()
	});

	let client = match reqwest::Client::builder().build() {
		Ok(client) => client,
		Err(e) => { log::error!("Failed to create HTTP client: {}", e); return }
	};

	if parsed_options.free.is_empty() {
		eprintln!("{}", opts.usage("Usage: gantry <resolve|info> <id>[@<version>] [options]"));
		return;
	}

	let command = parsed_options.free.get(0).unwrap().as_str();
	if command != "resolve" && command != "info" {
		log::error!("Unknown command: {}", command);
		return;
	}

	let spec = match parsed_options.free.get(1) {
		Some(spec) => spec,
		None => { log::error!("Component id not provided."); return },
	};
	let (id, requested_version) = split_component_spec(spec);

	if !parsed_options.opt_present("q") {
		log::info!("{} searching...", id);
	}

	let action = parsed_options.opt_str("a");
	let component = match gantry_rs::registry::lookup(&config, &client, id, action.as_deref()).await {
		Ok(component) => component,
		Err(e) => { log::error!("{}", e); return },
	};

	match command {
		"resolve" => {
			let request = ResolutionRequest {
				platform: parsed_options.opt_str("p"),
				version: requested_version.map(str::to_string),
				global: parsed_options.opt_present("g"),
			};

			let resolution = gantry_rs::resolver::resolve_distributions(&config, &component, &request);

			for diagnostic in &resolution.diagnostics {
				log::error!("{}", diagnostic);
			}

			if resolution.distributions.is_empty() {
				log::error!("{} nothing to install", component.id);
				return;
			}

			for dist in &resolution.distributions {
				println!("{}@{} [{}] {} -> {}",
					component.id,
					dist.version(),
					dist.platform,
					dist.source_path.display(),
					dist.target_path.display(),
				);
			}
		},
		_ => {
			println!("{} ({})", component.id, component.kind);
			println!("platforms: {}", component.platforms.join(", "));
			for version in &component.versions {
				let installable = if version.is_installable() { "" } else { " (no dist)" };
				println!("  {} [{}]{}", version.version, version.platforms.join(", "), installable);
			}
		},
	}
}

fn split_component_spec(spec: &str) -> (&str, Option<&str>) {
	match spec.split_once('@') {
		Some((id, version)) if !version.is_empty() => (id, Some(version)),
		Some((id, _)) => (id, None),
		None => (spec, None),
	}
}
