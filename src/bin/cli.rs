fn main() -> anyhow::Result<()> {
    forgeiq_ui_terminal::cli::run()
}
