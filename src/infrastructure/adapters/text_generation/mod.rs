//! Text Generation Adapters - 生成式文本服务实现

mod fake_text_generator;
mod gemini_client;
mod prompts;

pub use fake_text_generator::FakeTextGenerator;
pub use gemini_client::{GeminiClient, GeminiClientConfig};
