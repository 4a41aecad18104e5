//! Seeded component-name table.

use crate::model::Category::{
    self, Analytics, ApiGateway, Compute, Database, Devops, Groups, Identity, Messaging,
    MlAi, Monitoring, Network, Other, Security, Serverless, Storage,
};

/// Built-in AWS, Azure and GCP component names.
///
/// Order matters: partial matching walks this table front to back and the
/// first hit wins.
pub const SEEDED_COMPONENTS: &[(&str, Category)] = &[
    // Compute
    ("EC2", Compute),
    ("ECS", Compute),
    ("EKS", Compute),
    ("Fargate", Compute),
    ("Lambda", Compute),
    ("Lightsail", Compute),
    ("Batch", Compute),
    ("Beanstalk", Compute),
    ("VM", Compute),
    ("App Service", Compute),
    ("Container", Compute),
    ("Compute Engine", Compute),
    ("GKE", Compute),
    ("Cloud Run", Compute),
    ("SEI", Compute),
    ("SIP", Compute),
    ("Server", Compute),
    ("Vm Scaleset", Compute),
    ("Virtual Machine", Compute),
    ("Elastic Container Service", Compute),
    // Database
    ("RDS", Database),
    ("DynamoDB", Database),
    ("Aurora", Database),
    ("ElastiCache", Database),
    ("Redis", Database),
    ("Redshift", Database),
    ("Neptune", Database),
    ("DocumentDB", Database),
    ("Cosmos DB", Database),
    ("SQL Database", Database),
    ("Cloud SQL", Database),
    ("Firestore", Database),
    ("Bigtable", Database),
    ("MySQL", Database),
    ("PostgreSQL", Database),
    ("Table", Database),
    ("DB", Database),
    ("Oracle DB", Database),
    ("Mongo DB", Database),
    ("Memcached", Database),
    // Storage
    ("S3", Storage),
    ("EBS", Storage),
    ("EFS", Storage),
    ("Glacier", Storage),
    ("Blob Storage", Storage),
    ("Cloud Storage", Storage),
    ("FSx", Storage),
    ("Storage Gateway", Storage),
    ("File share", Storage),
    ("Snowball", Storage),
    ("Backup", Storage),
    ("DataSync", Storage),
    // Network
    ("VPC", Network),
    ("VPC Router", Network),
    ("Internet Gateway", Network),
    ("NAT Gateway", Network),
    ("Transit Gateway", Network),
    ("Direct Connect", Network),
    ("Private Link", Network),
    ("V-net", Network),
    ("Private Subnet", Network),
    ("Public Subnet", Network),
    ("Endpoint", Network),
    ("Customer Gateway", Network),
    ("VP Gateway", Network),
    ("CloudFront", Network),
    ("Route 53", Network),
    ("Route53", Network),
    ("Cloud Map", Network),
    ("ELB", Network),
    ("ALB", Network),
    ("NLB", Network),
    ("Load Balancer", Network),
    ("CDN", Network),
    ("Distribution", Network),
    ("Edge Location", Network),
    // Security
    ("WAF", Security),
    ("Shield", Security),
    ("GuardDuty", Security),
    ("KMS", Security),
    ("Key Management Service", Security),
    ("CloudHSM", Security),
    ("Secrets Manager", Security),
    ("Security Hub", Security),
    ("Certificate", Security),
    ("Certificate Manager", Security),
    ("Firewall", Security),
    ("Network Firewall", Security),
    ("Firewall Manager", Security),
    ("Inspector Agent", Security),
    ("Macie", Security),
    ("Detective", Security),
    ("Key vault", Security),
    ("Security Group", Security),
    // API Gateway
    ("API Gateway", ApiGateway),
    ("API-Gateway", ApiGateway),
    ("App gateway", ApiGateway),
    ("AppSync", ApiGateway),
    ("Appsync", ApiGateway),
    ("Apigee", ApiGateway),
    ("API Management", ApiGateway),
    // Messaging
    ("SQS", Messaging),
    ("SNS", Messaging),
    ("SES", Messaging),
    ("EventBridge", Messaging),
    ("Event Bus", Messaging),
    ("Kinesis", Messaging),
    ("Kinesis Data Streams", Messaging),
    ("Service Bus", Messaging),
    ("Pub/Sub", Messaging),
    ("MQ", Messaging),
    // Monitoring
    ("CloudWatch", Monitoring),
    ("Cloud Watch", Monitoring),
    ("CloudWatch Alarm", Monitoring),
    ("CloudTrail", Monitoring),
    ("Cloud Trail", Monitoring),
    ("X-Ray", Monitoring),
    ("Cloud Monitoring", Monitoring),
    ("Azure monitor", Monitoring),
    ("Grafana", Monitoring),
    ("Prometheus", Monitoring),
    ("Flow logs", Monitoring),
    ("Config", Monitoring),
    ("Trusted Advisor", Monitoring),
    // Identity
    ("IAM", Identity),
    ("IAM Role", Identity),
    ("Cognito", Identity),
    ("AAD", Identity),
    ("Active Directory Service", Identity),
    ("Sign-On", Identity),
    ("Users", Identity),
    ("Client", Other),
    // ML/AI
    ("Sagemaker", MlAi),
    ("Rekognition", MlAi),
    ("Comprehend", MlAi),
    ("Lex", MlAi),
    ("Textract", MlAi),
    ("Transcribe", MlAi),
    ("Translate", MlAi),
    ("Vertex AI", MlAi),
    ("Machine Learning", MlAi),
    ("Notebook", MlAi),
    // DevOps
    ("CodePipeline", Devops),
    ("CodeBuild", Devops),
    ("CodeCommit", Devops),
    ("CodeDeploy", Devops),
    ("Jenkins", Devops),
    ("Github", Devops),
    ("Git", Devops),
    ("Docker Image", Devops),
    ("Image Builder", Devops),
    ("CloudFormation Stack", Devops),
    ("Terraform", Devops),
    ("Deploy Stage", Devops),
    ("Build Environment", Devops),
    // Serverless
    ("Amplify", Serverless),
    ("AppFlow", Serverless),
    ("Step Functions", Serverless),
    ("Step Function", Serverless),
    // Analytics
    ("Athena", Analytics),
    ("Glue", Analytics),
    ("BigQuery", Analytics),
    ("EMR", Analytics),
    // Groups
    ("groups", Groups),
    ("Availability Zone", Groups),
    ("Region", Groups),
];
