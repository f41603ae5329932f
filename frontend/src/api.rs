//! Typed client for the MoneyMind REST API.
//!
//! Every request carries the session cookie (`credentials: include`) and,
//! when the client was built from a [`RequestScope`](crate::scope::RequestScope),
//! its abort signal.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use web_sys::{AbortSignal, RequestCredentials};

use crate::config;
use crate::error::{ApiError, Result};
use crate::models::{
    Budget, BudgetInput, Credit, CreditOverview, DashboardSummary, Debit, DebitOverview, Goal,
    GoalInput, MonthlyReport, NewTransaction, Profile, Transaction, TransactionKind,
};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: &'static str,
    signal: Option<AbortSignal>,
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new(config::api_base_url())
    }
}

/// Outcome of the backend health probe.
#[derive(Clone, Debug, PartialEq)]
pub enum BackendStatus {
    Connected(Value),
    /// The server answered but reported a database problem.
    DatabaseError(Value),
}

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base: &'static str) -> Self {
        ApiClient { base, signal: None }
    }

    pub fn with_signal(mut self, signal: Option<AbortSignal>) -> Self {
        self.signal = signal;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .credentials(RequestCredentials::Include)
            .header("Accept", "application/json")
            .abort_signal(self.signal.as_ref())
    }

    fn get(&self, path: &str) -> RequestBuilder {
        log::debug!("GET {}", path);
        self.prepare(Request::get(&self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        log::debug!("POST {}", path);
        self.prepare(Request::post(&self.url(path)))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        log::debug!("PUT {}", path);
        self.prepare(Request::put(&self.url(path)))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        log::debug!("DELETE {}", path);
        self.prepare(Request::delete(&self.url(path)))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        check_status(response).await
    }

    async fn send_json<B: Serialize>(&self, builder: RequestBuilder, body: &B) -> Result<Response> {
        let response = builder.json(body)?.send().await?;
        check_status(response).await
    }

    async fn read_field<T: DeserializeOwned>(response: Response, field: &str) -> Result<T> {
        let body: Value = response.json().await?;
        extract_field(body, field)
    }

    async fn read_ack(response: Response) -> Result<Option<String>> {
        let body: Value = match response.json().await {
            Ok(body) => body,
            // Some endpoints answer with an empty body.
            Err(gloo_net::Error::SerdeError(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        ensure_success(&body)?;
        Ok(message_of(&body))
    }

    // ---- auth ----

    pub async fn is_authenticated(&self) -> Result<bool> {
        let response = self.send(self.post("/auth/isAuthenticated")).await?;
        let body: Value = response.json().await?;
        Ok(body
            .get("authenticated")
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<()> {
        let body = json!({ "email": email, "password": password });
        let response = self.send_json(self.post("/auth/signin"), &body).await?;
        Self::read_ack(response).await.map(|_| ())
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<()> {
        let body = json!({ "email": email, "password": password });
        let response = self.send_json(self.post("/auth/signup"), &body).await?;
        Self::read_ack(response).await.map(|_| ())
    }

    pub async fn logout(&self) -> Result<()> {
        let response = self.send(self.post("/auth/logout")).await?;
        Self::read_ack(response).await.map(|_| ())
    }

    /// Exchanges a Google identity credential for a session.
    pub async fn google_sign_in(&self, credential: &str) -> Result<()> {
        let body = json!({ "credential": credential });
        let response = self.send_json(self.post("/auth/google"), &body).await?;
        let body: Value = response.json().await?;
        ensure_success(&body)?;
        match body.get("token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => Ok(()),
            _ => Err(ApiError::Rejected("No token received from server".to_string())),
        }
    }

    /// The server answers 400 when the address is already registered.
    pub async fn user_exists(&self, email: &str) -> Result<bool> {
        let body = json!({ "email": email });
        let response = self.post("/auth/userExists").json(&body)?.send().await?;
        match response.status() {
            400 => Ok(true),
            _ if response.ok() => Ok(false),
            _ => check_status(response).await.map(|_| false),
        }
    }

    pub async fn generate_otp(&self, email: &str, text: &str) -> Result<()> {
        let body = json!({ "email": email, "text": text });
        let response = self.send_json(self.post("/auth/generateOTP"), &body).await?;
        Self::read_ack(response).await.map(|_| ())
    }

    pub async fn verify_otp(&self, otp: &str) -> Result<()> {
        let body = json!({ "otp": otp });
        let response = self.send_json(self.post("/auth/verifyOTP"), &body).await?;
        Self::read_ack(response).await.map(|_| ())
    }

    pub async fn reset_password(&self, email: &str, password: &str) -> Result<()> {
        let body = json!({ "email": email, "password": password });
        let response = self.send_json(self.post("/auth/reset_password"), &body).await?;
        Self::read_ack(response).await.map(|_| ())
    }

    // ---- transactions ----

    /// Returns the server's confirmation message, if any.
    pub async fn add_transaction(&self, transaction: &NewTransaction) -> Result<Option<String>> {
        let path = match transaction.kind() {
            TransactionKind::Debit => "/add-transaction/debit-transaction",
            TransactionKind::Credit => "/add-transaction/credit-transaction",
        };
        let response = self.send_json(self.post(path), transaction).await?;
        Self::read_ack(response).await
    }

    pub async fn fetch_debits(&self) -> Result<Vec<Transaction>> {
        let response = self.send(self.get("/fetch-transactions/fetch-debits")).await?;
        let debits: Vec<Debit> = response.json().await?;
        Ok(debits.into_iter().map(Transaction::Debit).collect())
    }

    pub async fn fetch_credits(&self) -> Result<Vec<Transaction>> {
        let response = self.send(self.get("/fetch-transactions/fetch-credits")).await?;
        let credits: Vec<Credit> = response.json().await?;
        Ok(credits.into_iter().map(Transaction::Credit).collect())
    }

    pub async fn edit_transaction(&self, id: &str, transaction: &NewTransaction) -> Result<()> {
        let path = match transaction.kind() {
            TransactionKind::Debit => format!("/fetch-transactions/edit-debit/{}", encode_segment(id)),
            TransactionKind::Credit => format!("/fetch-transactions/edit-credit/{}", encode_segment(id)),
        };
        let response = self.send_json(self.put(&path), transaction).await?;
        Self::read_ack(response).await.map(|_| ())
    }

    pub async fn delete_transaction(&self, id: &str) -> Result<()> {
        let path = format!("/fetch-transactions/delete/{}", encode_segment(id));
        let response = self.send(self.delete(&path)).await?;
        Self::read_ack(response).await.map(|_| ())
    }

    // ---- home ----

    pub async fn dashboard(&self) -> Result<DashboardSummary> {
        Ok(self.send(self.get("/home/dashboard")).await?.json().await?)
    }

    pub async fn home_debits(&self) -> Result<DebitOverview> {
        Ok(self.send(self.get("/home/debits")).await?.json().await?)
    }

    pub async fn home_credits(&self) -> Result<CreditOverview> {
        Ok(self.send(self.get("/home/credits")).await?.json().await?)
    }

    // ---- reports ----

    pub async fn monthly_report(&self, month: u32, year: i32) -> Result<MonthlyReport> {
        let path = format!("/reports/monthly?month={}&year={}", month, year);
        Ok(self.send(self.get(&path)).await?.json().await?)
    }

    // ---- budgets ----

    pub async fn budgets(&self) -> Result<Vec<Budget>> {
        let response = self.send(self.get("/budgets")).await?;
        Self::read_field(response, "budgets").await
    }

    pub async fn create_budget(&self, input: &BudgetInput) -> Result<Budget> {
        let response = self.send_json(self.post("/budgets"), input).await?;
        Self::read_field(response, "budget").await
    }

    pub async fn update_budget(&self, id: &str, input: &BudgetInput) -> Result<Budget> {
        let path = format!("/budgets/{}", encode_segment(id));
        let response = self.send_json(self.put(&path), input).await?;
        Self::read_field(response, "budget").await
    }

    pub async fn delete_budget(&self, id: &str) -> Result<()> {
        let path = format!("/budgets/{}", encode_segment(id));
        let response = self.send(self.delete(&path)).await?;
        Self::read_ack(response).await.map(|_| ())
    }

    // ---- goals ----

    pub async fn goals(&self) -> Result<Vec<Goal>> {
        let response = self.send(self.get("/goals")).await?;
        Self::read_field(response, "goals").await
    }

    pub async fn create_goal(&self, input: &GoalInput) -> Result<Goal> {
        let response = self.send_json(self.post("/goals"), input).await?;
        Self::read_field(response, "goal").await
    }

    pub async fn delete_goal(&self, id: &str) -> Result<()> {
        let path = format!("/goals/{}", encode_segment(id));
        let response = self.send(self.delete(&path)).await?;
        Self::read_ack(response).await.map(|_| ())
    }

    pub async fn lifetime_savings(&self) -> Result<f64> {
        let response = self.send(self.get("/goals/lifetime-savings")).await?;
        Self::read_field(response, "lifetimeSavings").await
    }

    // ---- profile ----

    pub async fn profile(&self) -> Result<Profile> {
        let response = self.send(self.get("/profile")).await?;
        let body: Value = response.json().await?;
        ensure_success(&body)?;
        match body.get("profile") {
            None | Some(Value::Null) => Ok(Profile::default()),
            Some(profile) => {
                serde_json::from_value(profile.clone()).map_err(|err| ApiError::Decode(err.to_string()))
            }
        }
    }

    pub async fn update_profile(&self, profile: &Profile) -> Result<()> {
        let response = self.send_json(self.put("/profile"), profile).await?;
        Self::read_ack(response).await.map(|_| ())
    }

    // ---- health ----

    /// Network failures mean the backend is offline and come back as `Err`.
    pub async fn backend_status(&self) -> Result<BackendStatus> {
        let response = self.get("/api/db").send().await?;
        let ok = response.ok();
        let body: Value = response.json().await.unwrap_or(Value::Null);
        Ok(if ok {
            BackendStatus::Connected(body)
        } else {
            BackendStatus::DatabaseError(body)
        })
    }
}

async fn check_status(response: Response) -> Result<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .json::<MessageBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed ({} {})", status, response.status_text()));
    log::warn!("{} answered {}: {}", response.url(), status, message);
    Err(ApiError::Status { status, message })
}

fn message_of(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

/// Turns a `{ success: false, message }` body into an error.
pub fn ensure_success(body: &Value) -> Result<()> {
    match body.get("success").and_then(Value::as_bool) {
        Some(false) => Err(ApiError::Rejected(
            message_of(body).unwrap_or_else(|| "Request failed".to_string()),
        )),
        _ => Ok(()),
    }
}

/// Reads `field` out of a `{ success, <field> }` envelope.
pub fn extract_field<T: DeserializeOwned>(mut body: Value, field: &str) -> Result<T> {
    ensure_success(&body)?;
    let value = body
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| ApiError::Decode(format!("missing `{}`", field)))?;
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Percent-encodes everything outside the unreserved URL set.
pub fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_field_is_extracted() {
        let body = json!({
            "success": true,
            "budgets": [{ "_id": "b1", "category": "Food", "amount": 1000, "period": "weekly", "spent": 250 }]
        });
        let budgets: Vec<Budget> = extract_field(body, "budgets").unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].spent, Some(250.0));
    }

    #[test]
    fn unsuccessful_envelope_surfaces_message() {
        let body = json!({ "success": false, "message": "Budget already exists" });
        let err = extract_field::<Vec<Budget>>(body, "budgets").unwrap_err();
        assert_eq!(err, ApiError::Rejected("Budget already exists".to_string()));
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let body = json!({ "success": true });
        let err = extract_field::<f64>(body, "lifetimeSavings").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn bodies_without_success_flag_pass() {
        assert!(ensure_success(&json!({ "message": "Transaction added" })).is_ok());
        assert!(ensure_success(&json!({ "success": false })).is_err());
    }

    #[test]
    fn ids_are_path_safe() {
        assert_eq!(encode_segment("65f1a2b3c4"), "65f1a2b3c4");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    }
}
