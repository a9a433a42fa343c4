fn main() -> anyhow::Result<()> {
    cloud_cafe::cli::run()
}
