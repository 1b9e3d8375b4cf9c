#[cfg(test)]
mod integration_tests {
    use crate::auth::SessionKeys;
    use crate::schemas::ApiResponse;
    use crate::test_utils::test_utils::{
        insert_test_user, setup_test_app, setup_test_app_with_state, TEST_SECRET,
    };
    use axum::http::header::AUTHORIZATION;
    use axum::http::{HeaderValue, StatusCode};
    use axum_test::TestServer;
    use common::{LoginRequest, RegisterRequest, SentimentRequest};

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            name: "Asha Rao".to_string(),
            mobile_number: "9876543210".to_string(),
            age: "27".to_string(),
            email: "asha@example.com".to_string(),
            password: "correct horse battery".to_string(),
            confirm_password: "correct horse battery".to_string(),
        }
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_creates_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.post("/api/v1/register").json(&register_request()).await;

        response.assert_status(StatusCode::CREATED);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Registration successful!");
        assert_eq!(body.data["email"], "asha@example.com");
        assert!(body.data["id"].as_i64().unwrap() > 0);
        // The hash must never appear in the response
        assert!(body.data.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        server
            .post("/api/v1/register")
            .json(&register_request())
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.post("/api/v1/register").json(&register_request()).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "EMAIL_ALREADY_REGISTERED");
    }

    #[tokio::test]
    async fn test_register_rejects_mismatched_passwords() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = RegisterRequest {
            confirm_password: "something else entirely".to_string(),
            ..register_request()
        };
        let response = server.post("/api/v1/register").json(&request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"], "Passwords do not match");
    }

    #[tokio::test]
    async fn test_register_rejects_short_password() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = RegisterRequest {
            password: "short".to_string(),
            confirm_password: "short".to_string(),
            ..register_request()
        };
        let response = server.post("/api/v1/register").json(&request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_register_rejects_underage_user() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = RegisterRequest {
            age: "16".to_string(),
            ..register_request()
        };
        let response = server.post("/api/v1/register").json(&request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "UNDERAGE");
    }

    #[tokio::test]
    async fn test_register_rejects_unparseable_age() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let request = RegisterRequest {
            age: "twenty".to_string(),
            ..register_request()
        };
        let response = server.post("/api/v1/register").json(&request).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "INVALID_AGE");
    }

    #[tokio::test]
    async fn test_login_returns_verifiable_token() {
        let (app, state) = setup_test_app_with_state().await;
        let server = TestServer::new(app).unwrap();

        let user_id = insert_test_user(&state.db, "bob@example.com", "a secure password").await;

        let response = server
            .post("/api/v1/login")
            .json(&LoginRequest {
                email: "bob@example.com".to_string(),
                password: "a secure password".to_string(),
            })
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Login successful!");
        assert_eq!(body.data["user"]["id"].as_i64().unwrap() as i32, user_id);

        // The token must verify against the server's signing secret
        let token = body.data["token"].as_str().unwrap();
        let claims = SessionKeys::new(TEST_SECRET).verify(token).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let (app, state) = setup_test_app_with_state().await;
        let server = TestServer::new(app).unwrap();

        insert_test_user(&state.db, "bob@example.com", "a secure password").await;

        let response = server
            .post("/api/v1/login")
            .json(&LoginRequest {
                email: "bob@example.com".to_string(),
                password: "wrong password".to_string(),
            })
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_email() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/login")
            .json(&LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "whatever12".to_string(),
            })
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let (app, state) = setup_test_app_with_state().await;
        let server = TestServer::new(app).unwrap();

        insert_test_user(&state.db, "bob@example.com", "a secure password").await;

        let login: ApiResponse<serde_json::Value> = server
            .post("/api/v1/login")
            .json(&LoginRequest {
                email: "bob@example.com".to_string(),
                password: "a secure password".to_string(),
            })
            .await
            .json();
        let token = login.data["token"].as_str().unwrap().to_string();

        let response = server
            .get("/api/v1/session")
            .add_header(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
            )
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert_eq!(body.data["email"], "bob@example.com");
    }

    #[tokio::test]
    async fn test_session_rejects_missing_token() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/session").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "MISSING_TOKEN");
    }

    #[tokio::test]
    async fn test_session_rejects_forged_token() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/session")
            .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer not.a.real-token"))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "INVALID_SESSION");
    }

    #[tokio::test]
    async fn test_sentiment_labels_match_polarity_sign() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let cases = [
            ("The market looks great and I expect strong gains", "positive"),
            ("I'm worried this is a crash, huge losses ahead", "negative"),
            ("The filing deadline is next Tuesday", "neutral"),
        ];

        for (text, expected) in cases {
            let response = server
                .post("/api/v1/analyze-sentiment")
                .json(&SentimentRequest { text: text.to_string() })
                .await;

            response.assert_status(StatusCode::OK);
            let body: ApiResponse<serde_json::Value> = response.json();
            assert_eq!(body.data["sentiment"], expected, "text: {text}");

            let polarity = body.data["polarity"].as_f64().unwrap();
            match expected {
                "positive" => assert!(polarity > 0.0),
                "negative" => assert!(polarity < 0.0),
                _ => assert_eq!(polarity, 0.0),
            }
        }
    }

    #[tokio::test]
    async fn test_sentiment_rejects_blank_text() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        for text in ["", "   ", "\n\t"] {
            let response = server
                .post("/api/v1/analyze-sentiment")
                .json(&SentimentRequest { text: text.to_string() })
                .await;

            response.assert_status(StatusCode::BAD_REQUEST);
            let body: serde_json::Value = response.json();
            assert_eq!(body["code"], "TEXT_REQUIRED");
        }
    }
}
