use accessor_gen::utils::{logger, validation::Validate};
use accessor_gen::{
    activate, AccessorGenError, AccessorGenerator, CliConfig, CommandRegistry, EditorPort,
    FileEditor, GenerationOutcome, GEN_GETTERS_SETTERS,
};
use clap::Parser;

fn exit_with(e: AccessorGenError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        exit_with(e);
    }
    let settings = config.resolve_settings().unwrap_or_else(|e| exit_with(e));

    let mut editor =
        FileEditor::open(&config.file, config.cursor()).unwrap_or_else(|e| exit_with(e));
    let generator =
        AccessorGenerator::from_config(&settings).with_declaration(config.interface.clone());

    if config.list || config.dry_run {
        let Some((declaration, properties)) = generator
            .properties(&editor)
            .unwrap_or_else(|e| exit_with(e))
        else {
            return Ok(());
        };
        tracing::info!(
            "Found {} properties in {}",
            properties.len(),
            generator.extractor().interface_name(&declaration)
        );

        if config.list {
            let json = serde_json::to_string_pretty(&properties)
                .map_err(AccessorGenError::from)
                .unwrap_or_else(|e| exit_with(e));
            println!("{}", json);
        } else if !properties.is_empty() {
            println!("{}", generator.renderer().render_block(&properties));
        }
        return Ok(());
    }

    let mut registry = CommandRegistry::new();
    activate(&mut registry, generator);

    let outcome = registry
        .execute(GEN_GETTERS_SETTERS, &mut editor as &mut dyn EditorPort)
        .unwrap_or_else(|e| exit_with(e));

    match outcome {
        GenerationOutcome::Inserted {
            declaration,
            properties,
            position,
        } => {
            println!(
                "✅ Inserted accessors for {} properties of {} at line {}",
                properties,
                declaration,
                position.line + 1
            );
        }
        GenerationOutcome::NoProperties { declaration } => {
            tracing::warn!(
                "No interface declaration for {} in {}, nothing inserted",
                declaration,
                editor.path().display()
            );
        }
        GenerationOutcome::NoActiveDocument => {
            tracing::warn!("No document to edit, nothing inserted");
        }
    }

    Ok(())
}
