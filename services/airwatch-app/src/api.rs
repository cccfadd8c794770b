//! Client-side API fetch helpers
//!
//! Thin wrappers over the HTTP/JSON backend. The real requests only
//! exist in WASM builds; elsewhere the helpers are inert stubs so the
//! components still compile for non-browser targets.

use airwatch_model::{NewWard, Reading, Ward};

/// Backend base URL; the mobile client talks to a fixed remote host
pub const BASE_URL: &str = "https://minor-project-backend-bom7.onrender.com";

pub async fn fetch_readings() -> Result<Vec<Reading>, String> {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        let url = format!("{}/api/data", BASE_URL);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;
        if !resp.ok() {
            return Err(format!("status {}", resp.status()));
        }
        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        Ok(vec![])
    }
}

pub async fn fetch_wards() -> Result<Vec<Ward>, String> {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        let url = format!("{}/api/wards", BASE_URL);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;
        if !resp.ok() {
            return Err(format!("status {}", resp.status()));
        }
        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        Ok(vec![])
    }
}

pub async fn create_ward(payload: &NewWard) -> Result<Ward, String> {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        let url = format!("{}/api/wards", BASE_URL);
        let resp = gloo_net::http::Request::post(&url)
            .json(payload)
            .map_err(|e| format!("{}", e))?
            .send()
            .await
            .map_err(|e| format!("{}", e))?;
        if !resp.ok() {
            return Err(format!("status {}", resp.status()));
        }
        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        let _ = payload;
        Err("network requests are browser-only".to_string())
    }
}

pub async fn delete_ward(id: &str) -> Result<(), String> {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        let url = format!("{}/api/wards/{}", BASE_URL, id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;
        if !resp.ok() {
            return Err(format!("status {}", resp.status()));
        }
        Ok(())
    }

    #[cfg(not(all(feature = "csr", target_arch = "wasm32")))]
    {
        let _ = id;
        Err("network requests are browser-only".to_string())
    }
}
