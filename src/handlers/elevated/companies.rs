// handlers/elevated/companies.rs - GET/POST /companies

use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::app::AppState;
use crate::database::models::{Company, NewCompany};
use crate::error::{ApiError, FieldError};
use crate::middleware::{ApiJson, ApiResponse, ApiResult};

const EXPECTED_STRING: &str = "Expected string";

/// POST /companies body as sent. Fields stay untyped so a wrong JSON type is
/// reported against its field instead of rejecting the whole body.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCompanyBody {
    pub name: Option<Value>,
    pub address: Option<Value>,
    pub phone: Option<Value>,
}

#[derive(Debug, Validate)]
pub struct CreateCompanyRequest {
    #[validate(
        required(message = "Company name is required"),
        length(min = 1, message = "Company name is required")
    )]
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl TryFrom<CreateCompanyBody> for CreateCompanyRequest {
    type Error = ApiError;

    fn try_from(body: CreateCompanyBody) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        let request = Self {
            name: string_field("name", body.name, &mut errors),
            address: string_field("address", body.address, &mut errors),
            phone: string_field("phone", body.phone, &mut errors),
        };

        if errors.is_empty() {
            Ok(request)
        } else {
            Err(ApiError::validation_error("Validation failed", errors))
        }
    }
}

// null is treated as absent
fn string_field(field: &str, value: Option<Value>, errors: &mut Vec<FieldError>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(FieldError::new(field, EXPECTED_STRING));
            None
        }
    }
}

impl TryFrom<CreateCompanyRequest> for NewCompany {
    type Error = ApiError;

    fn try_from(request: CreateCompanyRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        Ok(NewCompany {
            // present and non-empty once validation passes
            name: request.name.unwrap_or_default(),
            address: request.address,
            phone: request.phone,
        })
    }
}

/// GET /companies - every company, name ascending
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Company>> {
    let companies = state.store.list_companies().await.map_err(|e| {
        tracing::error!("[COMPANIES_GET] {}", e);
        ApiError::internal_server_error("Internal error")
    })?;

    Ok(ApiResponse::success(companies))
}

/// POST /companies - validate and insert
pub async fn create(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateCompanyBody>,
) -> ApiResult<Company> {
    let new_company = NewCompany::try_from(CreateCompanyRequest::try_from(body)?)?;

    let company = state.store.create_company(new_company).await.map_err(|e| {
        tracing::error!("[COMPANIES_POST] {}", e);
        ApiError::internal_server_error("Internal error")
    })?;

    tracing::info!("Created company {} ({})", company.name, company.id);
    Ok(ApiResponse::success(company))
}
