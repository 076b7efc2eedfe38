//! Interface de linha de comando do keeper-watch baseada em clap.
//!
//! Define a struct [`Cli`] com subcomandos [`Command`] (check, watch, jobs, head)
//! e flags globais (--config, --window, --network, --verbose).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// keeper-watch — Monitor de jobs parados em redes de keepers.
#[derive(Debug, Parser)]
#[command(name = "keeper-watch", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Caminho do arquivo de configuração (padrão: ./keeper-watch.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Número de blocos inspecionados por job (1 = apenas o estado atual).
    #[arg(long, global = true)]
    pub window: Option<u64>,

    /// Nome da rede de keepers passado ao predicado `workable`.
    #[arg(long, global = true)]
    pub network: Option<String>,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Executa um único ciclo de monitoramento e alerta os jobs parados.
    Check {
        /// Imprime o relatório do ciclo em JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Executa ciclos periodicamente até receber Ctrl-C.
    Watch {
        /// Intervalo em segundos entre ciclos.
        #[arg(long)]
        interval: Option<u64>,

        /// Encerra após este número de ciclos.
        #[arg(long)]
        cycles: Option<u64>,
    },

    /// Lista os jobs registrados no sequencer sem avaliá-los.
    Jobs,

    /// Mostra o número do bloco mais recente.
    Head,
}
