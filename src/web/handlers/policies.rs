//! Policy entry and listing handlers.

use axum::{Json, extract::State, http::StatusCode};

use crate::core::{agent, customer, policy};
use crate::entities::policy as policy_entity;
use crate::errors::Error;
use crate::web::handlers::{HandlerError, internal_error};
use crate::web::models::{AgentOption, ErrorResponse, NewPolicyRequest, PolicyOptions, PolicyRow};
use crate::web::state::AppState;

impl From<NewPolicyRequest> for policy::NewPolicy {
    fn from(body: NewPolicyRequest) -> Self {
        Self {
            full_name: body.full_name,
            national_id: body.national_id,
            phone: body.phone,
            email: body.email,
            policy_number: body.policy_number,
            product_type: body.product_type,
            company: body.company,
            plate: body.plate,
            document_serial: body.document_serial,
            start_date: body.start_date,
            end_date: body.end_date,
            premium: body.premium,
            payment_method: body.payment_method,
            agent_id: body.agent_id,
            description: body.description,
        }
    }
}

/// `GET /api/policies`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PolicyRow>>, HandlerError> {
    let policies = policy::get_all_policies(&state.db)
        .await
        .map_err(|e| internal_error("Poliçeler yüklenirken hata oluştu", &e))?;
    let customers = customer::get_all_customers(&state.db)
        .await
        .map_err(|e| internal_error("Müşteriler yüklenirken hata oluştu", &e))?;

    let rows = policies
        .into_iter()
        .map(|p| {
            let customer_name = customer::display_name(&customers, p.customer_id);
            PolicyRow {
                policy: p,
                customer_name,
            }
        })
        .collect();
    Ok(Json(rows))
}

/// `POST /api/policies`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewPolicyRequest>,
) -> Result<(StatusCode, Json<policy_entity::Model>), HandlerError> {
    match policy::create_policy(&state.db, &state.rates, body.into()).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(created))),
        // Form validation failures surface their inline message
        Err(e @ (Error::Validation { .. } | Error::InvalidAmount { .. })) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
                code: Some("VALIDATION".to_string()),
            }),
        )),
        Err(e) => Err(internal_error("Poliçe kaydedilirken hata oluştu", &e)),
    }
}

/// `GET /api/policy-options`
pub async fn options(State(state): State<AppState>) -> Result<Json<PolicyOptions>, HandlerError> {
    let agents = agent::get_active_agents(&state.db)
        .await
        .map_err(|e| internal_error("Satışçılar yüklenirken hata oluştu", &e))?;

    Ok(Json(PolicyOptions {
        product_types: policy::PRODUCT_TYPES.iter().map(|s| (*s).to_string()).collect(),
        companies: policy::COMPANIES.iter().map(|s| (*s).to_string()).collect(),
        payment_methods: policy::PAYMENT_METHODS.iter().map(|s| (*s).to_string()).collect(),
        agents: agents
            .into_iter()
            .map(|a| AgentOption {
                id: a.id,
                full_name: a.full_name,
            })
            .collect(),
    }))
}
