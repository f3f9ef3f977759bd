use clap::Args;

#[derive(Args)]
pub(crate) struct CreateArgs {
    pub(crate) name: String,
    /// Stream type, e.g. stream.t-stream or stream.apache-kafka
    #[arg(long = "type")]
    pub(crate) stream_type: String,
    /// Service the stream is bound to
    #[arg(long)]
    pub(crate) service: String,
    #[arg(long)]
    pub(crate) description: Option<String>,
    /// Space-separated tags
    #[arg(long, default_value = "")]
    pub(crate) tags: String,
    #[arg(long)]
    pub(crate) partitions: Option<u32>,
    #[arg(long)]
    pub(crate) replication_factor: Option<u32>,
    #[arg(long)]
    pub(crate) primary: Option<String>,
    /// Overwrite an existing stream of the same name on the service
    #[arg(long)]
    pub(crate) force: bool,
    /// Generator type (t-streams only): local|global|per-stream
    #[arg(long)]
    pub(crate) generator_type: Option<String>,
    /// Generator service (t-streams only)
    #[arg(long)]
    pub(crate) generator_service: Option<String>,
    /// Generator instance count (t-streams only)
    #[arg(long)]
    pub(crate) instance_count: Option<u32>,
}

#[derive(Args)]
pub(crate) struct DeleteArgs {
    pub(crate) name: String,
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub(crate) yes: bool,
    /// Refuse to delete while instances still use the stream
    #[arg(long)]
    pub(crate) enforce_blockers: bool,
}
