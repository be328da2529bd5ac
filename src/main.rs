use burstload::error::AppResult;

fn main() -> AppResult<()> {
    burstload::entry::run()
}
