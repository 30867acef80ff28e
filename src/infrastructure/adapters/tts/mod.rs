//! TTS Adapter - 各 TTS 服务的客户端实现

mod factory;
mod fake_tts_client;
mod fish_audio_client;
mod openai_tts_client;

pub use factory::build_tts_engine;
pub use fake_tts_client::{FakeTtsClient, FakeTtsClientConfig};
pub use fish_audio_client::*;
pub use openai_tts_client::*;

use reqwest::{Response, StatusCode};

use crate::application::ports::TtsError;

/// 拼接服务基础 URL 与固定子路径，基础 URL 末尾的 `/` 会被去掉
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// 读取 TTS 服务响应：非 200 状态返回 `ServiceError`（附带响应体），否则返回音频字节
pub(crate) async fn read_audio_response(response: Response) -> Result<Vec<u8>, TtsError> {
    let status = response.status();
    if status != StatusCode::OK {
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            status = status.as_u16(),
            url = %url,
            "TTS request failed"
        );
        return Err(TtsError::ServiceError {
            status: status.as_u16(),
            body,
        });
    }

    let audio_data = response
        .bytes()
        .await
        .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?;
    Ok(audio_data.to_vec())
}
