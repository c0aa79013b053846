use std::sync::Arc;

use connect_http::{routes, ConfigFetcher, Http, HttpConfig};

fn main() {
    let http = Http::with_config(HttpConfig::new("http://localhost:8080").user_agent("fetcher-pub"))
        .expect("client should build");
    let _url = routes::CONFIG.url(http.api_root());
    let _fetcher: Arc<dyn ConfigFetcher> = Arc::new(http);
    let _stub: Box<dyn ConfigFetcher> = Box::new(module::Stub);
}

mod module {
    use connect_http::{ConfigFetcher, Result};
    use connect_models::config::Config;

    pub struct Stub;

    #[async_trait::async_trait]
    impl ConfigFetcher for Stub {
        async fn fetch_config(&self, _platform: &str, _version: &str) -> Result<Config> {
            Ok(Config::new())
        }
    }
}
