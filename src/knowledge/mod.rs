//! Static STRIDE threat knowledge base.
//!
//! Each category owns an ordered, non-empty list of threats. The lists are
//! `'static` and shared by every analysis of that category.

use crate::model::{Category, Severity, ThreatRisk, ThreatType};

const fn threat(
    threat_type: ThreatType,
    label: &'static str,
    detail: &'static str,
    mitigation: &'static str,
    severity: Severity,
) -> ThreatRisk {
    ThreatRisk {
        threat_type,
        label,
        detail,
        mitigation,
        severity,
    }
}

const S: &str = "S - Spoofing";
const T: &str = "T - Tampering";
const R: &str = "R - Repudiation";
const I: &str = "I - Information Disclosure";
const D: &str = "D - Denial of Service";
const E: &str = "E - Elevation of Privilege";

pub const COMPUTE_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::Spoofing,
        S,
        "Instances can be cloned or impersonated by attackers.",
        "Enable IMDSv2, use restrictive security groups and IAM roles.",
        Severity::High,
    ),
    threat(
        ThreatType::Tampering,
        T,
        "Unauthorized modification of instance configuration or data.",
        "Enable CloudTrail, use verified AMIs and integrity monitoring.",
        Severity::High,
    ),
    threat(
        ThreatType::ElevationOfPrivilege,
        E,
        "Exploitation of vulnerabilities to gain root privileges.",
        "Patch regularly and apply least privilege to IAM roles.",
        Severity::Critical,
    ),
];

pub const DATABASE_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::InformationDisclosure,
        I,
        "Sensitive data can be exposed through queries or unencrypted backups.",
        "Enable encryption at rest and in transit, use VPC endpoints.",
        Severity::Critical,
    ),
    threat(
        ThreatType::Tampering,
        T,
        "Unauthorized modification of database records.",
        "Enable audit logging, use IAM authentication and hardened parameter groups.",
        Severity::High,
    ),
    threat(
        ThreatType::DenialOfService,
        D,
        "Heavy queries or connection flooding can make the database unavailable.",
        "Configure connection pooling, query timeouts and read replicas.",
        Severity::Medium,
    ),
];

pub const STORAGE_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::InformationDisclosure,
        I,
        "Public buckets or blobs can expose sensitive data.",
        "Block public access, enable encryption and restrictive bucket policies.",
        Severity::Critical,
    ),
    threat(
        ThreatType::Tampering,
        T,
        "Objects can be modified or deleted without authorization.",
        "Enable versioning, MFA delete and Object Lock.",
        Severity::High,
    ),
    threat(
        ThreatType::Repudiation,
        R,
        "Object operations happen without an audit trail.",
        "Enable S3 access logging and CloudTrail data events.",
        Severity::Medium,
    ),
];

pub const NETWORK_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::Spoofing,
        S,
        "Network traffic can be spoofed to reach internal resources.",
        "Use NACLs, security groups and VPN or Direct Connect for access.",
        Severity::High,
    ),
    threat(
        ThreatType::InformationDisclosure,
        I,
        "Unencrypted traffic can be intercepted.",
        "Use TLS in transit, VPC Flow Logs and private endpoints.",
        Severity::High,
    ),
    threat(
        ThreatType::DenialOfService,
        D,
        "DDoS attacks can make the service unavailable.",
        "Use AWS Shield, WAF and CloudFront for DDoS mitigation.",
        Severity::High,
    ),
];

pub const SECURITY_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::ElevationOfPrivilege,
        E,
        "Permissive IAM policies can allow privilege escalation.",
        "Apply least privilege, use IAM Access Analyzer and SCPs.",
        Severity::Critical,
    ),
    threat(
        ThreatType::Spoofing,
        S,
        "Compromised credentials can be used for impersonation.",
        "Enable MFA, rotate keys and monitor access.",
        Severity::Critical,
    ),
    threat(
        ThreatType::Repudiation,
        R,
        "Administrative actions without adequate logging.",
        "Enable CloudTrail in every region with log file validation.",
        Severity::High,
    ),
];

pub const API_GATEWAY_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::Spoofing,
        S,
        "Unauthenticated APIs can be exploited by attackers.",
        "Implement API keys, OAuth2/JWT and throttling.",
        Severity::High,
    ),
    threat(
        ThreatType::DenialOfService,
        D,
        "Request floods can overload the backend.",
        "Configure rate limiting, caching and request validation.",
        Severity::Medium,
    ),
    threat(
        ThreatType::InformationDisclosure,
        I,
        "Error responses can expose infrastructure details.",
        "Customize error responses and enable request/response logging.",
        Severity::Medium,
    ),
];

pub const MESSAGING_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::Tampering,
        T,
        "Queued messages can be modified in transit.",
        "Enable encryption in transit and at rest, use VPC endpoints.",
        Severity::High,
    ),
    threat(
        ThreatType::InformationDisclosure,
        I,
        "Messages can carry sensitive data in plaintext.",
        "Encrypt sensitive payloads and use client-side encryption.",
        Severity::High,
    ),
    threat(
        ThreatType::DenialOfService,
        D,
        "Message flooding can saturate consumers.",
        "Configure dead-letter queues and concurrency limits.",
        Severity::Medium,
    ),
];

pub const MONITORING_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::Tampering,
        T,
        "Logs can be modified or deleted to cover up attacks.",
        "Ship logs to a separate account, enable log file integrity validation.",
        Severity::High,
    ),
    threat(
        ThreatType::InformationDisclosure,
        I,
        "Logs can contain sensitive data (tokens, PII, etc).",
        "Sanitize logs and restrict access to log groups.",
        Severity::Medium,
    ),
];

pub const IDENTITY_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::Spoofing,
        S,
        "User credentials can be compromised through phishing.",
        "Enable MFA, strong password policies and anomaly detection.",
        Severity::Critical,
    ),
    threat(
        ThreatType::ElevationOfPrivilege,
        E,
        "Users may escalate privileges through federation flaws.",
        "Review trust policies, use conditional access and RBAC.",
        Severity::High,
    ),
];

pub const ML_AI_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::Tampering,
        T,
        "Datasets or models can be poisoned.",
        "Validate dataset integrity, use model versioning and lineage tracking.",
        Severity::High,
    ),
    threat(
        ThreatType::InformationDisclosure,
        I,
        "Model inversion attacks can extract training data.",
        "Apply differential privacy and limit access to inference endpoints.",
        Severity::High,
    ),
    threat(
        ThreatType::DenialOfService,
        D,
        "Expensive inference calls can exhaust resources and run up costs.",
        "Configure auto-scaling limits, request throttling and budget alerts.",
        Severity::Medium,
    ),
];

pub const SERVERLESS_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::ElevationOfPrivilege,
        E,
        "Lambda functions running with a permissive IAM role.",
        "Apply least privilege per function. Use resource-based policies.",
        Severity::High,
    ),
    threat(
        ThreatType::DenialOfService,
        D,
        "Recursive execution or infinite loops can exhaust concurrency.",
        "Configure reserved concurrency. Set an appropriate timeout.",
        Severity::Medium,
    ),
    threat(
        ThreatType::InformationDisclosure,
        I,
        "Environment variables can expose secrets.",
        "Use Secrets Manager or Parameter Store for sensitive data.",
        Severity::High,
    ),
];

pub const DEVOPS_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::ElevationOfPrivilege,
        E,
        "CI/CD pipelines usually hold elevated deploy permissions.",
        "Use per-stage roles. Require approval for production.",
        Severity::Critical,
    ),
    threat(
        ThreatType::Tampering,
        T,
        "Malicious code can be injected into the pipeline.",
        "Enable branch protection. Require code review. Sign commits.",
        Severity::High,
    ),
    threat(
        ThreatType::InformationDisclosure,
        I,
        "Secrets can leak into build logs.",
        "Use Secrets Manager. Never hardcode secrets. Mask them in logs.",
        Severity::High,
    ),
];

pub const ANALYTICS_THREATS: &[ThreatRisk] = &[
    threat(
        ThreatType::InformationDisclosure,
        I,
        "Data lake queries can expose sensitive data across teams.",
        "Implement column-level security and row-level filtering.",
        Severity::High,
    ),
    threat(
        ThreatType::Tampering,
        T,
        "Analysis results can be manipulated.",
        "Enable audit logging and dataset versioning.",
        Severity::Medium,
    ),
];

pub const GROUPS_THREATS: &[ThreatRisk] = &[threat(
    ThreatType::Spoofing,
    S,
    "Resource groupings can mask unauthorized access.",
    "Define clear boundaries with resource policies and mandatory tags.",
    Severity::Medium,
)];

pub const OTHER_THREATS: &[ThreatRisk] = &[threat(
    ThreatType::Spoofing,
    S,
    "Uncategorized component requires manual security review.",
    "Verify authentication and authorization manually.",
    Severity::Medium,
)];

/// Threats attached to every component of `category`.
#[must_use]
pub const fn threats_for(category: Category) -> &'static [ThreatRisk] {
    match category {
        Category::Compute => COMPUTE_THREATS,
        Category::Database => DATABASE_THREATS,
        Category::Storage => STORAGE_THREATS,
        Category::Network => NETWORK_THREATS,
        Category::Security => SECURITY_THREATS,
        Category::ApiGateway => API_GATEWAY_THREATS,
        Category::Messaging => MESSAGING_THREATS,
        Category::Monitoring => MONITORING_THREATS,
        Category::Identity => IDENTITY_THREATS,
        Category::MlAi => ML_AI_THREATS,
        Category::Devops => DEVOPS_THREATS,
        Category::Serverless => SERVERLESS_THREATS,
        Category::Analytics => ANALYTICS_THREATS,
        Category::Groups => GROUPS_THREATS,
        Category::Other => OTHER_THREATS,
    }
}
