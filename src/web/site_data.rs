// Landing page copy

pub const SITE_NAME: &str = "ize";

pub const DESCRIPTION: &str = "An opinionated deployment tool for infrastructure and code. \
The main goal is to co-join operational tasks into one easy-to-use tool. \
It provides a robust abstraction level on top of common orchestration and code deployment systems.";

pub const MAIN_FEATURES: &[&str] = &["AWS", "Terraform", "Docker", "Serverless", "ECS", "CI/CD"];

/// Marker appended to items that are still being built.
pub const UNDER_DEVELOPMENT_NOTE: &str = "*Currently under development";

/// One block of the features section.
#[derive(Debug, Clone, Copy)]
pub struct FeatureBlock {
    pub title: &'static str,
    pub summary: &'static str,
    pub items: &'static [&'static str],
}

pub const FEATURES: &[FeatureBlock] = &[
    FeatureBlock {
        title: "Coherent Infrastructure Deployment",
        summary: "We abstract infrastructure management and provide a clean coherent way to deploy it. \
                  Infra rollouts integrate with:",
        items: &["Terraform", "Ansible*", "Cloudformation*"],
    },
    FeatureBlock {
        title: "Coherent Application Deployment",
        summary: "We unify the application deployment process and use naming conventions to streamline deployments. \
                  Supported targets:",
        items: &["ECS (using ecs-deploy underneath)", "k8s*", "Serverless*"],
    },
    FeatureBlock {
        title: "Port Forwarding via Bastion Host",
        summary: "No VPN needed to reach your private network when you are just starting out.",
        items: &[
            "Establish port forwarding to any private resource via your bastion host.",
            "Connect to private resources without compromising on security.",
        ],
    },
    FeatureBlock {
        title: "Interactive Console to Fargate Containers",
        summary: "Access containers running on AWS Fargate by providing the service name.",
        items: &[],
    },
    FeatureBlock {
        title: "Application Secrets Management",
        summary: "Push and remove secrets to and from AWS Parameter Store.",
        items: &[],
    },
    FeatureBlock {
        title: "Terraform Environment Management",
        summary: "Environment definitions live in a toml file in the local repository.",
        items: &[],
    },
];
