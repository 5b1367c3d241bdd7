//! Admin results view.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use qweek_application::AdminService;
use qweek_application::admin_service::{DELETE_FAILED_MESSAGE, DELETED_MESSAGE};

use crate::bootstrap::AppContext;
use crate::ui::screens;

fn service(context: &AppContext) -> AdminService {
    AdminService::new(Arc::clone(&context.repository))
}

pub async fn list(context: &AppContext) -> Result<()> {
    let participants = service(context)
        .list_participants()
        .await
        .context("Failed to load results")?;

    println!(
        "{}",
        format!("Resultados ({} store)", context.config.store.backend).bright_magenta().bold()
    );
    screens::participants_table(&participants);
    Ok(())
}

pub async fn delete(context: &AppContext, id: &str) -> Result<()> {
    match service(context).delete_participant(id).await {
        Ok(()) => println!("{}", DELETED_MESSAGE.green()),
        Err(e) if e.is_not_found() => {
            screens::notice(&format!("{} ({})", DELETE_FAILED_MESSAGE, e));
        }
        Err(e) => {
            screens::notice(DELETE_FAILED_MESSAGE);
            return Err(e).context("Failed to delete result");
        }
    }
    Ok(())
}

pub async fn export(context: &AppContext, output: &Path, stdout: bool) -> Result<()> {
    let admin = service(context);
    if stdout {
        let csv = admin.export_csv().await.context("Failed to export results")?;
        println!("{}", csv);
        return Ok(());
    }

    let rows = admin
        .export_to_file(output)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "{}",
        format!("Exportadas {} participaciones a {}", rows, output.display()).green()
    );
    Ok(())
}
