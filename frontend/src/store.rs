//! HTTP implementation of the catalog store boundary.

use common::gateway::{BlobKey, CatalogStore, Collection, StoreError};
use common::requests::{BlobUrl, InsertedDocument};
use gloo_net::http::{Request, Response};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::API_BASE;

#[derive(Clone, Default)]
pub struct HttpCatalogStore;

impl CatalogStore for HttpCatalogStore {
    type Blob = File;

    async fn insert<C: Collection>(&self, draft: &C::Draft) -> Result<String, StoreError> {
        let response = Request::post(&format!("{}/{}", API_BASE, C::NAME))
            .json(draft)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let inserted: InsertedDocument = expect_success(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(inserted.id)
    }

    async fn delete<C: Collection>(&self, id: &str) -> Result<(), StoreError> {
        let url = format!(
            "{}/{}/{}",
            API_BASE,
            C::NAME,
            String::from(js_sys::encode_uri_component(id))
        );
        let response = Request::delete(&url).send().await.map_err(network)?;
        expect_success(response).await?;
        Ok(())
    }

    async fn upload(&self, key: &BlobKey, blob: &File) -> Result<(), StoreError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("file", blob, &blob.name())
            .map_err(js_error)?;

        let response = Request::post(&format!("{}/storage/{}", API_BASE, key))
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        expect_success(response).await?;
        Ok(())
    }

    async fn download_url(&self, key: &BlobKey) -> Result<String, StoreError> {
        let response = Request::get(&format!("{}/storage/url/{}", API_BASE, key))
            .send()
            .await
            .map_err(network)?;
        let blob_url: BlobUrl = expect_success(response)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(blob_url.url)
    }
}

async fn expect_success(response: Response) -> Result<Response, StoreError> {
    if response.ok() {
        return Ok(response);
    }
    Err(StoreError::Status {
        status: response.status(),
        message: response.text().await.unwrap_or_default(),
    })
}

fn network(e: gloo_net::Error) -> StoreError {
    StoreError::Network(e.to_string())
}

fn js_error(e: JsValue) -> StoreError {
    StoreError::Network(format!("{:?}", e))
}
