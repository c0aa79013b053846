use reqwest::{Client, Method, RequestBuilder};

/// Describes an endpoint: the http method and the path below the api root.
///
/// Parameters are not part of the route; they are serialized into the
/// query string by [`Http::execute`](crate::Http::execute).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
}

impl Route {
    /// Joins `api_root` and the path with exactly one `/` in between.
    pub fn url(&self, api_root: &str) -> String {
        format!(
            "{}/{}",
            api_root.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    pub fn request(&self, client: &Client, api_root: &str) -> RequestBuilder {
        client.request(self.method.clone(), self.url(api_root))
    }
}

macro_rules! route {
    ($method:ident $path:literal) => {
        Route {
            method: Method::$method,
            path: $path,
        }
    };
}

pub mod routes {
    use super::*;

    /// `GET /config?platform=..&version=..`
    pub const CONFIG: Route = route!(GET "/config");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_route() {
        assert_eq!(routes::CONFIG.method, Method::GET);
        assert_eq!(routes::CONFIG.path, "/config");
    }

    #[test]
    fn url_joins_with_single_slash() {
        let route = routes::CONFIG;

        assert_eq!(route.url("https://api.example.com"), "https://api.example.com/config");
        assert_eq!(route.url("https://api.example.com/"), "https://api.example.com/config");
        assert_eq!(
            route.url("https://api.example.com/v2//"),
            "https://api.example.com/v2/config"
        );
    }

    #[test]
    fn request_targets_route_url() {
        let request = routes::CONFIG
            .request(&Client::new(), "http://localhost:8080/")
            .build()
            .unwrap();

        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().as_str(), "http://localhost:8080/config");
    }
}
