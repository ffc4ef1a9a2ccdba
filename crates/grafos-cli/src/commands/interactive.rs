//! Interactive command implementation

use super::analyze::report;
use crate::output::OutputWriter;
use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use grafos_client::{HttpBackend, Session};
use grafos_core::config::LayeredConfig;
use grafos_render::MemorySurface;

const MODES: [&str; 3] = ["walk", "drive", "bike"];

pub async fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let backend = HttpBackend::new(config.backend_url.value.as_str());
    output.info(format!("Warming up with {}", config.city.value));

    let mut session =
        Session::start(backend, MemorySurface::new(), config.language.value, config.default_form())
            .await?;
    report(session.controller(), &[], output)?;

    loop {
        let again = Confirm::new()
            .with_prompt("Run another analysis?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }

        let form = session.form_mut();

        form.city = Input::new()
            .with_prompt("City")
            .default(form.city.clone())
            .interact_text()?;

        let current = MODES.iter().position(|m| *m == form.mode).unwrap_or(0);
        let mode_idx = Select::new()
            .with_prompt("Network type")
            .items(&MODES[..])
            .default(current)
            .interact()?;
        form.mode = MODES[mode_idx].to_string();

        form.radius_km = Input::new()
            .with_prompt("Radius (km)")
            .default(form.radius_km)
            .validate_with(|radius: &f64| -> Result<(), &str> {
                if radius.is_finite() && *radius > 0.0 {
                    Ok(())
                } else {
                    Err("Radius must be a positive number")
                }
            })
            .interact_text()?;

        output.info("Submitting analysis");
        session.submit().await?;
        report(session.controller(), &[], output)?;
    }

    Ok(())
}
