//! Interface de terminal do keeper-watch — spinner e saída colorida.
//!
//! Usa as crates `indicatif` para o spinner de progresso e `console` para
//! estilização com cores. O [`CycleProgress`] acompanha visualmente
//! a execução de um ciclo no terminal.

use alloy::primitives::Address;
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::WatchError;
use crate::monitor::{CycleReport, Job};

/// Indicador visual de progresso para um ciclo de monitoramento.
///
/// Exibe um spinner animado enquanto os jobs são avaliados e mensagens
/// coloridas para sucesso (verde), falha (vermelho) e jobs parados (amarelo).
pub struct CycleProgress {
    // Spinner do indicatif.
    pb: ProgressBar,
    // Estilo verde para mensagens de sucesso.
    green: Style,
    // Estilo vermelho para mensagens de falha.
    red: Style,
    // Estilo amarelo para jobs parados.
    yellow: Style,
}

impl CycleProgress {
    /// Inicia o spinner com a descrição do ciclo e retorna a instância de progresso.
    pub fn start(description: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(description.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }

    /// Finaliza o spinner e exibe o resultado do ciclo.
    pub fn complete(&self, result: &Result<CycleReport, WatchError>) {
        self.pb.finish_and_clear();
        match result {
            Ok(report) if report.stale_jobs.is_empty() => {
                println!(
                    "  {} {} jobs workable within {} blocks of #{}",
                    self.green.apply_to("✓"),
                    report.jobs_checked,
                    report.window,
                    report.block
                );
            }
            Ok(report) => {
                for index in &report.stale_jobs {
                    println!(
                        "  {} Job {index} has NOT been workable in the last {} blocks",
                        self.yellow.apply_to("!"),
                        report.window
                    );
                }
                println!(
                    "  {} {}/{} jobs stale at #{}",
                    self.yellow.apply_to("↻"),
                    report.stale_jobs.len(),
                    report.jobs_checked,
                    report.block
                );
            }
            Err(e) => {
                println!("  {} Cycle failed ({}): {e}", self.red.apply_to("✗"), e.kind());
            }
        }
    }
}

/// Imprime o relatório do ciclo formatado em JSON.
pub fn print_report_json(report: &CycleReport) -> Result<(), WatchError> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Imprime a lista de jobs registrados, um por linha.
pub fn print_jobs(sequencer: Address, jobs: &[Job]) {
    let dim = Style::new().dim();
    println!("{} {sequencer}", Style::new().cyan().apply_to("Sequencer:"));
    if jobs.is_empty() {
        println!("{}", dim.apply_to("No jobs registered."));
        return;
    }
    for job in jobs {
        println!("{:>4}  {}", dim.apply_to(job.index), job.address);
    }
}

/// Imprime o número do bloco mais recente.
pub fn print_head(block: u64) {
    println!("{} {block}", Style::new().cyan().apply_to("Latest block number:"));
}
