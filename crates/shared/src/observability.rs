//! # ログ出力の初期化
//!
//! `LOG_FORMAT=json` で JSON 出力、それ以外は人間向けの出力になる。
//! ログレベルは `RUST_LOG` で上書きできる。

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,taskboard=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// `LOG_FORMAT` の値から出力形式を決める
    ///
    /// `json`（大文字小文字を問わない）以外はすべて `Pretty`。
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Pretty,
        }
    }

    pub fn from_env() -> Self {
        Self::from_value(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// グローバルな subscriber を登録する
///
/// `ErrorLayer` も登録するため、`InfraError` の `SpanTrace` に
/// 発生時のスパンが記録される。プロセスごとに一度だけ呼ぶこと。
#[cfg(feature = "observability")]
pub fn init_tracing(service: &'static str) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let format = LogFormat::from_env();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    tracing::debug!(service, ?format, "ログ出力を初期化しました");
}
