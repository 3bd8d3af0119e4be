fn main() -> anyhow::Result<()> {
    stockbook_cli::run()
}
