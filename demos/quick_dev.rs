
use anyhow::Result;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<()> {
    let hc = httpc_test::new_client("http://localhost:3000")?;

    hc.do_get("/messages").await?.print().await?;

    let req_create = hc.do_post(
        "/messages",
        json!({
            "name": "demo",
            "message": "hello from quick_dev"
        }),
    );
    let res_create = req_create.await?;
    res_create.print().await?;

    let id = res_create.json_body()?["id"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    hc.do_put(
        &format!("/messages/{id}"),
        json!({
            "name": "demo",
            "message": "replaced"
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_patch(
        &format!("/messages/{id}"),
        json!({
            "message": "patched"
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_delete(&format!("/messages/{id}")).await?.print().await?;

    hc.do_get("/messages").await?.print().await?;

    Ok(())
}
