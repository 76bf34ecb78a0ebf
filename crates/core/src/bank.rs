//! The built-in question bank: the fixed topic set and its curated questions.
//!
//! Process-lifetime constant data; the rest of the system reads it through
//! [`crate::catalog::QuestionCatalog`].

use crate::model::Difficulty::{Advanced, Basic, Intermediate};
use crate::model::{Question, Topic};

/// The fixed topic set.
#[must_use]
pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new(
            "linux",
            "Linux",
            "Core OS fundamentals, shell scripting, and kernel internals.",
            "terminal",
            "emerald",
        ),
        Topic::new(
            "cloud",
            "Cloud",
            "AWS, Azure, and GCP architecture, IAM, and networking.",
            "cloud",
            "sky",
        ),
        Topic::new(
            "docker",
            "Docker",
            "Containerization, layering, networking, and security.",
            "box",
            "blue",
        ),
        Topic::new(
            "ansible",
            "Ansible",
            "Configuration management, playbooks, and automation.",
            "settings",
            "red",
        ),
        Topic::new(
            "terraform",
            "Terraform",
            "Infrastructure as Code, state management, and providers.",
            "cpu",
            "purple",
        ),
        Topic::new(
            "jenkins",
            "Jenkins",
            "CI/CD pipelines, shared libraries, and distributed builds.",
            "refresh-cw",
            "orange",
        ),
        Topic::new(
            "devops",
            "DevOps",
            "Culture, methodologies, and cross-functional practices.",
            "tally",
            "indigo",
        ),
        Topic::new(
            "sre",
            "SRE",
            "Reliability, SLIs/SLOs, and incident management.",
            "shield-check",
            "cyan",
        ),
        Topic::new(
            "python",
            "Python",
            "Automation scripting, system integration, and data handling.",
            "code",
            "yellow",
        ),
    ]
}

/// The curated question set, grouped by topic.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn questions() -> Vec<Question> {
    let mut bank = Vec::new();
    bank.extend(linux());
    bank.extend(cloud());
    bank.extend(docker());
    bank.extend(ansible());
    bank.extend(terraform());
    bank.extend(jenkins());
    bank.extend(devops());
    bank.extend(sre());
    bank.extend(python());
    bank
}

fn linux() -> Vec<Question> {
    vec![
        Question::new(
            "l-b-1",
            "linux",
            Basic,
            "What is the \"root\" user?",
            "The superuser account with full access to all commands and files.",
        ),
        Question::new("l-b-2", "linux", Basic, "How do you list hidden files?", "Use \"ls -a\".")
            .with_snippet("ls -a", "bash"),
        Question::new("l-b-3", "linux", Basic, "Command to change directory?", "The \"cd\" command.")
            .with_snippet("cd /var/log", "bash"),
        Question::new(
            "l-b-4",
            "linux",
            Basic,
            "What is \"pwd\"?",
            "Prints the absolute path of the current working directory.",
        ),
        Question::new("l-b-5", "linux", Basic, "How to create a directory?", "Use \"mkdir\".")
            .with_snippet("mkdir my_folder", "bash"),
        Question::new("l-b-6", "linux", Basic, "How to remove a file?", "Use \"rm\".")
            .with_snippet("rm test.txt", "bash"),
        Question::new("l-b-7", "linux", Basic, "How to copy a file?", "Use \"cp\".")
            .with_snippet("cp source.txt dest.txt", "bash"),
        Question::new("l-b-8", "linux", Basic, "How to move or rename a file?", "Use \"mv\".")
            .with_snippet("mv old.txt new.txt", "bash"),
        Question::new(
            "l-b-9",
            "linux",
            Basic,
            "How to view file content?",
            "Use \"cat\", \"less\", or \"more\".",
        ),
        Question::new(
            "l-b-10",
            "linux",
            Basic,
            "What is \"grep\"?",
            "A command-line utility for searching plain-text data sets for lines that match a regular expression.",
        ),
        Question::new(
            "l-i-1",
            "linux",
            Intermediate,
            "What is an \"Inode\"?",
            "A data structure describing a filesystem object (file/dir) except its name and actual data.",
        ),
        Question::new(
            "l-i-2",
            "linux",
            Intermediate,
            "Difference between Hard and Soft links?",
            "Hard links point to the same inode; soft links (symlinks) point to the filename path.",
        ),
        Question::new(
            "l-i-3",
            "linux",
            Intermediate,
            "What is a \"Zombie Process\"?",
            "A process that has finished execution but still has an entry in the process table.",
        ),
        Question::new(
            "l-i-4",
            "linux",
            Intermediate,
            "How to check open ports?",
            "Use \"ss -tulpn\" or \"netstat -tulpn\".",
        )
        .with_snippet("ss -tulpn", "bash"),
        Question::new(
            "l-i-5",
            "linux",
            Intermediate,
            "What is \"umask\"?",
            "A bitmask that sets the default permissions for new files/directories.",
        ),
        Question::new(
            "l-a-1",
            "linux",
            Advanced,
            "What is the \"OOM Killer\"?",
            "A kernel routine that kills processes to free memory when the system is dangerously low.",
        ),
        Question::new(
            "l-a-2",
            "linux",
            Advanced,
            "How do Namespaces work?",
            "Kernel feature that isolates system resources (PID, Net, Mount) so processes see separate environments.",
        ),
        Question::new(
            "l-a-3",
            "linux",
            Advanced,
            "Explain \"Cgroups\".",
            "Control Groups limit, account for, and isolate resource usage (CPU, Memory, I/O) of process groups.",
        ),
        Question::new(
            "l-a-4",
            "linux",
            Advanced,
            "What is \"eBPF\"?",
            "Technology allowing sandboxed programs to run in the kernel for observability and networking.",
        ),
        Question::new(
            "l-a-5",
            "linux",
            Advanced,
            "What happens during Context Switching?",
            "The CPU stops executing one process, saves state, and starts another, involving kernel overhead.",
        ),
    ]
}

fn cloud() -> Vec<Question> {
    vec![
        Question::new(
            "cl-b-1",
            "cloud",
            Basic,
            "What is a VPC?",
            "A logically isolated virtual network inside a cloud provider where you launch resources.",
        ),
        Question::new(
            "cl-b-2",
            "cloud",
            Basic,
            "IaaS vs PaaS vs SaaS?",
            "IaaS rents raw compute/storage, PaaS adds a managed runtime, SaaS delivers the finished application.",
        ),
        Question::new(
            "cl-b-3",
            "cloud",
            Basic,
            "What is an Availability Zone?",
            "An isolated datacenter (or group) within a region; spreading across AZs survives single-site failures.",
        ),
        Question::new(
            "cl-i-1",
            "cloud",
            Intermediate,
            "What is an IAM role and when would you prefer it over access keys?",
            "A role grants temporary credentials assumed by a principal; preferred because nothing long-lived can leak.",
        ),
        Question::new(
            "cl-i-2",
            "cloud",
            Intermediate,
            "Security Group vs Network ACL?",
            "Security groups are stateful and instance-scoped; NACLs are stateless, ordered rules at the subnet boundary.",
        ),
        Question::new(
            "cl-i-3",
            "cloud",
            Intermediate,
            "How does an autoscaling group decide to scale?",
            "Policies evaluate metrics (CPU, queue depth, custom CloudWatch alarms) against thresholds and adjust desired capacity.",
        ),
        Question::new(
            "cl-a-1",
            "cloud",
            Advanced,
            "Design a multi-region active-active setup. What breaks first?",
            "Data: you need conflict-free replication or partitioned writes; DNS/anycast routing and health checks handle traffic.",
        ),
        Question::new(
            "cl-a-2",
            "cloud",
            Advanced,
            "What is a cold start and how do you mitigate it?",
            "First-invocation latency while a function's sandbox boots; mitigate with provisioned concurrency, smaller bundles, or warmers.",
        ),
        Question::new(
            "cl-a-3",
            "cloud",
            Advanced,
            "Explain S3 consistency guarantees.",
            "S3 is strongly consistent for all reads after writes and deletes, including list operations, since late 2020.",
        ),
    ]
}

fn docker() -> Vec<Question> {
    vec![
        Question::new(
            "dk-b-1",
            "docker",
            Basic,
            "Image vs Container?",
            "An image is an immutable layered filesystem plus metadata; a container is a running instance with a writable layer.",
        ),
        Question::new(
            "dk-b-2",
            "docker",
            Basic,
            "What does \"docker ps\" show?",
            "Running containers; add -a to include stopped ones.",
        )
        .with_snippet("docker ps -a", "bash"),
        Question::new(
            "dk-b-3",
            "docker",
            Basic,
            "What is a Dockerfile?",
            "A build recipe: each instruction creates a cached image layer.",
        ),
        Question::new(
            "dk-i-1",
            "docker",
            Intermediate,
            "Why do multi-stage builds shrink images?",
            "Build tooling stays in earlier stages; the final stage copies only artifacts, dropping compilers and caches.",
        )
        .with_snippet(
            "FROM rust:1.79 AS build\nCOPY . .\nRUN cargo build --release\n\nFROM debian:bookworm-slim\nCOPY --from=build target/release/app /usr/local/bin/app",
            "dockerfile",
        ),
        Question::new(
            "dk-i-2",
            "docker",
            Intermediate,
            "CMD vs ENTRYPOINT?",
            "ENTRYPOINT fixes the executable; CMD supplies default arguments that \"docker run\" can override.",
        ),
        Question::new(
            "dk-i-3",
            "docker",
            Intermediate,
            "How does bridge networking work?",
            "Containers join a private bridge with NAT to the host; published ports map host ports onto container ports.",
        ),
        Question::new(
            "dk-a-1",
            "docker",
            Advanced,
            "What actually isolates a container?",
            "Kernel namespaces isolate the view (PID, net, mount) and cgroups limit resources; there is no hypervisor.",
        ),
        Question::new(
            "dk-a-2",
            "docker",
            Advanced,
            "How would you harden a production container?",
            "Run as non-root, read-only rootfs, drop capabilities, pin digests, scan images, and set seccomp/AppArmor profiles.",
        ),
        Question::new(
            "dk-a-3",
            "docker",
            Advanced,
            "Why can \"latest\" tags break deployments?",
            "Tags are mutable pointers; the same tag can resolve to different digests over time, so pin by digest for reproducibility.",
        ),
    ]
}

fn ansible() -> Vec<Question> {
    vec![
        Question::new(
            "ans-b-1",
            "ansible",
            Basic,
            "What is a playbook?",
            "A YAML file mapping hosts to ordered tasks (and roles) that Ansible executes over SSH.",
        ),
        Question::new(
            "ans-b-2",
            "ansible",
            Basic,
            "What is the inventory?",
            "The list of managed hosts and groups, static (INI/YAML) or dynamic from a cloud source.",
        ),
        Question::new(
            "ans-b-3",
            "ansible",
            Basic,
            "Is Ansible agent-based?",
            "No; it is agentless and pushes modules over SSH (or WinRM) to the targets.",
        ),
        Question::new(
            "ans-i-1",
            "ansible",
            Intermediate,
            "What makes a task idempotent?",
            "Modules describe desired state and only act when the state differs, reporting \"changed\" accordingly.",
        ),
        Question::new(
            "ans-i-2",
            "ansible",
            Intermediate,
            "What are handlers?",
            "Tasks run once at the end of a play, only when notified by a changed task (e.g. restart after config change).",
        ),
        Question::new(
            "ans-i-3",
            "ansible",
            Intermediate,
            "How do roles help at scale?",
            "They package tasks, vars, templates, and handlers into a reusable unit with a conventional layout.",
        ),
        Question::new(
            "ans-a-1",
            "ansible",
            Advanced,
            "How does Ansible Vault fit into CI?",
            "Secrets stay encrypted in the repo; CI supplies the vault password via a protected secret and decrypts at run time.",
        ),
        Question::new(
            "ans-a-2",
            "ansible",
            Advanced,
            "Strategies to speed up large playbook runs?",
            "Raise forks, use \"strategy: free\", enable pipelining and fact caching, and scope runs with tags and limits.",
        ),
        Question::new(
            "ans-a-3",
            "ansible",
            Advanced,
            "When does check mode lie to you?",
            "When tasks depend on results of earlier changed tasks or use command/shell modules that cannot predict state.",
        ),
    ]
}

fn terraform() -> Vec<Question> {
    vec![
        Question::new(
            "tf-b-1",
            "terraform",
            Basic,
            "What is Terraform state?",
            "A file mapping your configuration to real resource ids so Terraform can plan diffs.",
        ),
        Question::new(
            "tf-b-2",
            "terraform",
            Basic,
            "What does \"terraform plan\" do?",
            "Computes the actions needed to reconcile real infrastructure with the configuration, without applying them.",
        )
        .with_snippet("terraform plan -out=tfplan", "bash"),
        Question::new(
            "tf-b-3",
            "terraform",
            Basic,
            "What is a provider?",
            "A plugin exposing a platform's API (AWS, Azure, GitHub) as resource types.",
        ),
        Question::new(
            "tf-i-1",
            "terraform",
            Intermediate,
            "Why use remote state with locking?",
            "Teams share one source of truth and the lock prevents two applies from corrupting state concurrently.",
        ),
        Question::new(
            "tf-i-2",
            "terraform",
            Intermediate,
            "count vs for_each?",
            "count indexes by position so reordering churns resources; for_each keys by a stable map/set key.",
        ),
        Question::new(
            "tf-i-3",
            "terraform",
            Intermediate,
            "What does \"terraform import\" solve?",
            "Brings an existing, manually created resource under state management without recreating it.",
        ),
        Question::new(
            "tf-a-1",
            "terraform",
            Advanced,
            "How do you handle secrets in state?",
            "State stores attributes in plaintext, so encrypt the backend, restrict access, and prefer references over literals.",
        ),
        Question::new(
            "tf-a-2",
            "terraform",
            Advanced,
            "When is \"terraform state mv\" the right tool?",
            "Refactors (renames, module moves) where the resource should survive but its address changed.",
        ),
        Question::new(
            "tf-a-3",
            "terraform",
            Advanced,
            "Blast-radius control for a large monorepo of IaC?",
            "Split state per environment/component, gate applies through plans in CI, and use workspaces or stacks sparingly.",
        ),
    ]
}

fn jenkins() -> Vec<Question> {
    vec![
        Question::new(
            "jk-b-1",
            "jenkins",
            Basic,
            "What is a Jenkinsfile?",
            "A pipeline-as-code definition (declarative or scripted Groovy) versioned with the repository.",
        ),
        Question::new(
            "jk-b-2",
            "jenkins",
            Basic,
            "Freestyle job vs Pipeline?",
            "Freestyle is point-and-click single steps; pipelines are code with stages, parallelism, and durability.",
        ),
        Question::new(
            "jk-b-3",
            "jenkins",
            Basic,
            "What is an agent (node)?",
            "A machine (or container) the controller schedules builds onto; labels route stages to capable agents.",
        ),
        Question::new(
            "jk-i-1",
            "jenkins",
            Intermediate,
            "What are shared libraries?",
            "Reusable Groovy steps/classes loaded from a separate repo so teams share pipeline logic.",
        ),
        Question::new(
            "jk-i-2",
            "jenkins",
            Intermediate,
            "How do you keep credentials out of build logs?",
            "Use the credentials binding plugin; bound secrets are masked and scoped to the step that needs them.",
        )
        .with_snippet(
            "withCredentials([string(credentialsId: 'token', variable: 'TOKEN')]) {\n  sh 'deploy --token $TOKEN'\n}",
            "groovy",
        ),
        Question::new(
            "jk-i-3",
            "jenkins",
            Intermediate,
            "What triggers a multibranch pipeline?",
            "Branch indexing plus webhooks: each branch/PR with a Jenkinsfile gets its own job automatically.",
        ),
        Question::new(
            "jk-a-1",
            "jenkins",
            Advanced,
            "How do you scale Jenkins for hundreds of teams?",
            "Ephemeral agents (Kubernetes plugin), controller-per-team or CasC-managed controllers, and artifact offloading.",
        ),
        Question::new(
            "jk-a-2",
            "jenkins",
            Advanced,
            "What does Configuration as Code (JCasC) buy you?",
            "The controller's configuration lives in YAML under review, making rebuilds reproducible and auditable.",
        ),
        Question::new(
            "jk-a-3",
            "jenkins",
            Advanced,
            "Why are long-lived static agents an anti-pattern?",
            "They drift, hoard state between builds, and become snowflakes; ephemeral agents give hermetic builds.",
        ),
    ]
}

fn devops() -> Vec<Question> {
    vec![
        Question::new(
            "do-b-1",
            "devops",
            Basic,
            "What problem does DevOps solve?",
            "The wall between development and operations: shared ownership shortens feedback loops from commit to production.",
        ),
        Question::new(
            "do-b-2",
            "devops",
            Basic,
            "CI vs CD?",
            "CI merges and tests changes continuously; CD extends that to automatically delivering (or deploying) every good build.",
        ),
        Question::new(
            "do-b-3",
            "devops",
            Basic,
            "What are the DORA metrics?",
            "Deployment frequency, lead time for changes, change failure rate, and time to restore service.",
        ),
        Question::new(
            "do-i-1",
            "devops",
            Intermediate,
            "Blue-green vs canary deployments?",
            "Blue-green switches all traffic between two identical stacks; canary shifts a small slice first and watches metrics.",
        ),
        Question::new(
            "do-i-2",
            "devops",
            Intermediate,
            "What is GitOps?",
            "Declared desired state in Git with an operator reconciling the cluster to it; rollback is a revert.",
        ),
        Question::new(
            "do-i-3",
            "devops",
            Intermediate,
            "Why trunk-based development?",
            "Small, frequent merges to one branch avoid long-lived divergence and enable continuous integration for real.",
        ),
        Question::new(
            "do-a-1",
            "devops",
            Advanced,
            "How do you roll out a breaking schema change with zero downtime?",
            "Expand-migrate-contract: add the new shape, dual-write/backfill, switch readers, then drop the old shape.",
        ),
        Question::new(
            "do-a-2",
            "devops",
            Advanced,
            "Feature flags at scale: what goes wrong?",
            "Flag debt, combinatorial testing gaps, and config-as-runtime-state; you need ownership, expiry, and kill switches.",
        ),
        Question::new(
            "do-a-3",
            "devops",
            Advanced,
            "What makes a good platform team?",
            "Treat the platform as a product: paved roads, self-service APIs, and SLAs instead of ticket-driven gatekeeping.",
        ),
    ]
}

fn sre() -> Vec<Question> {
    vec![
        Question::new(
            "sr-b-1",
            "sre",
            Basic,
            "SLI vs SLO vs SLA?",
            "An SLI measures service behavior, an SLO is the internal target for it, an SLA is the contractual promise.",
        ),
        Question::new(
            "sr-b-2",
            "sre",
            Basic,
            "What is an error budget?",
            "1 minus the SLO: the amount of unreliability you may spend on change before freezing risky releases.",
        ),
        Question::new(
            "sr-b-3",
            "sre",
            Basic,
            "What is toil?",
            "Manual, repetitive, automatable operational work that scales with service size and carries no lasting value.",
        ),
        Question::new(
            "sr-i-1",
            "sre",
            Intermediate,
            "Four golden signals?",
            "Latency, traffic, errors, and saturation.",
        ),
        Question::new(
            "sr-i-2",
            "sre",
            Intermediate,
            "What belongs in a good postmortem?",
            "A blameless timeline, contributing causes, impact quantification, and tracked action items; never a named culprit.",
        ),
        Question::new(
            "sr-i-3",
            "sre",
            Intermediate,
            "Why alert on symptoms rather than causes?",
            "Users feel symptoms; cause-based alerts page for conditions that may not hurt anyone and rot quickly.",
        ),
        Question::new(
            "sr-a-1",
            "sre",
            Advanced,
            "Design load shedding for an overloaded API.",
            "Classify requests by criticality, reject early at admission with cheap checks, and degrade non-essential features first.",
        ),
        Question::new(
            "sr-a-2",
            "sre",
            Advanced,
            "What is a retry storm and how do you prevent it?",
            "Synchronized client retries amplifying an outage; use exponential backoff with jitter, retry budgets, and circuit breakers.",
        ),
        Question::new(
            "sr-a-3",
            "sre",
            Advanced,
            "How do you make a dependency graph survivable?",
            "Rank criticality, remove cycles, add timeouts and fallbacks per edge, and test with fault injection/chaos drills.",
        ),
    ]
}

fn python() -> Vec<Question> {
    vec![
        Question::new(
            "py-b-1",
            "python",
            Basic,
            "What is a virtual environment?",
            "An isolated interpreter prefix with its own site-packages so project dependencies do not collide.",
        )
        .with_snippet("python -m venv .venv && source .venv/bin/activate", "bash"),
        Question::new(
            "py-b-2",
            "python",
            Basic,
            "List vs tuple?",
            "Lists are mutable; tuples are immutable and hashable when their elements are.",
        ),
        Question::new(
            "py-b-3",
            "python",
            Basic,
            "How do you read a file safely?",
            "Use a \"with\" block so the handle closes even on error.",
        )
        .with_snippet("with open(\"config.yaml\") as fh:\n    data = fh.read()", "python"),
        Question::new(
            "py-i-1",
            "python",
            Intermediate,
            "What is the GIL?",
            "A mutex letting one thread execute Python bytecode at a time; use processes or native extensions for CPU-bound work.",
        ),
        Question::new(
            "py-i-2",
            "python",
            Intermediate,
            "What are context managers good for in automation?",
            "Deterministic setup/teardown (locks, temp dirs, connections) via __enter__/__exit__ regardless of exceptions.",
        ),
        Question::new(
            "py-i-3",
            "python",
            Intermediate,
            "subprocess.run vs os.system?",
            "subprocess.run avoids the shell by default, captures output, and surfaces return codes; os.system is a shell string.",
        ),
        Question::new(
            "py-a-1",
            "python",
            Advanced,
            "When does asyncio beat threads for ops tooling?",
            "High-fanout I/O (thousands of HTTP/SSH calls): one event loop avoids thread overhead and GIL contention.",
        ),
        Question::new(
            "py-a-2",
            "python",
            Advanced,
            "How do generators keep memory flat on huge logs?",
            "They yield one item at a time, so pipelines stream instead of materializing intermediate lists.",
        ),
        Question::new(
            "py-a-3",
            "python",
            Advanced,
            "What does __slots__ change?",
            "Replaces the per-instance dict with fixed attribute slots, cutting memory and attribute-lookup cost for many objects.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn question_ids_are_unique() {
        let ids: Vec<_> = questions().into_iter().map(|q| q.id).collect();
        let unique: BTreeSet<_> = ids.iter().cloned().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn every_question_references_a_known_topic() {
        let topic_ids: BTreeSet<_> = topics().into_iter().map(|t| t.id).collect();
        for question in questions() {
            assert!(
                topic_ids.contains(&question.topic_id),
                "unknown topic for {}",
                question.id
            );
        }
    }
}
