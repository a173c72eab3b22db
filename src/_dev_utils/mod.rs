
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::model::ModelManager;

/// Initializes the shared test ModelManager over a throwaway data file.
/// Tests run serialized against it and clean up the records they create.
pub async fn init_test() -> ModelManager {
    static INIT: OnceCell<ModelManager> = OnceCell::const_new();

    let mm = INIT
        .get_or_init(|| async {
            let data_file =
                std::env::temp_dir().join(format!("guestbook_test_{}.json", Uuid::new_v4()));
            ModelManager::with_data_file(data_file)
        })
        .await;

    mm.clone()
}
