use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct NewScholarshipDoc {
    pub title: Option<String>,
    pub sponsor: Option<String>,
    pub amount: Option<f64>,
    pub deadline: Option<String>,
    /// Defaults to `open`.
    pub status: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct NewUserDoc {
    pub address: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub balance: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UserPatchDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub balance: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PartyDoc { pub id: String, pub name: String }

#[derive(Serialize, ToSchema)]
pub struct NewMessageDoc {
    pub sender: PartyDoc,
    pub recipient: PartyDoc,
    pub content: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewApplicationDoc {
    pub scholarship_id: String,
    pub scholarship_title: Option<String>,
    pub applicant_id: Option<String>,
    pub story: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub documents: Vec<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionDoc {
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    /// Decimal string or number, must be non-negative.
    pub amount: String,
    pub scholarship_id: Option<String>,
    pub tx_hash: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MilestoneDoc { pub description: String, pub percentage: f64 }

#[derive(Serialize, ToSchema)]
pub struct ContractTermsDoc {
    pub milestones: Vec<MilestoneDoc>,
    pub minimum_gpa: Option<f64>,
    pub deadline: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct NewSmartContractDoc {
    pub contract_address: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub sponsor_address: Option<String>,
    pub total_funds: Option<String>,
    pub remaining_funds: Option<String>,
    pub terms: Option<ContractTermsDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::scholarships::list,
        crate::routes::scholarships::get,
        crate::routes::scholarships::create,
        crate::routes::users::get_by_address,
        crate::routes::users::create,
        crate::routes::users::update,
        crate::routes::messages::list_for_user,
        crate::routes::messages::send,
        crate::routes::messages::mark_read,
        crate::routes::applications::submit,
        crate::routes::applications::list_for_scholarship,
        crate::routes::applications::list_for_user,
        crate::routes::transactions::record,
        crate::routes::transactions::list_for_address,
        crate::routes::contracts::list,
        crate::routes::contracts::get,
        crate::routes::contracts::create,
        crate::routes::webhook::inbound,
    ),
    components(
        schemas(
            HealthResponse,
            NewScholarshipDoc,
            NewUserDoc,
            UserPatchDoc,
            PartyDoc,
            NewMessageDoc,
            NewApplicationDoc,
            NewTransactionDoc,
            MilestoneDoc,
            ContractTermsDoc,
            NewSmartContractDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "scholarships"),
        (name = "users"),
        (name = "messages"),
        (name = "applications"),
        (name = "transactions"),
        (name = "contracts"),
        (name = "webhook")
    )
)]
pub struct ApiDoc;
