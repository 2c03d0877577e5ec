mod data;
mod morpho;
mod report;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    report::run()
}
