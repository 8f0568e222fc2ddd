use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::utils::date::describe_month;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::new(cfg.store_path());

    for m in ReportLogic::months(&store)? {
        println!("{m}  {}", describe_month(m));
    }

    Ok(())
}
