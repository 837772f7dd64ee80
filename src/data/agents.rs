use crate::analytics::round1;
use crate::models::{AgentPerformance, AgentRole, Region};

const AGENT_NAMES: [&str; 16] = [
    "Nova Carter",
    "Maya Chen",
    "Dante Ruiz",
    "Elena Popov",
    "Kai Ndirangu",
    "Zara Iqbal",
    "Leo Martins",
    "Priya Veda",
    "Mateo Silva",
    "Selene Ward",
    "Owen Brooks",
    "Aria Delgado",
    "Noor Khan",
    "Theo Laurent",
    "Layla Ortiz",
    "Rin Nakamura",
];

// Agents are staffed in four of the five regions.
const AGENT_REGIONS: [Region; 4] = [Region::Na, Region::Emea, Region::Apac, Region::Latam];

const FOCUS_AREAS: [[&str; 2]; 4] = [
    ["Billing mastery", "AI co-pilot"],
    ["Voice empathy", "Premium accounts"],
    ["Fraud playbooks", "Escalation sweeps"],
    ["Workflow automations", "Multi-channel"],
];

pub fn generate_agent(index: usize) -> AgentPerformance {
    let base = 72.0 + (index % 7) as f64 * 3.0;
    let role = match index % 3 {
        0 => AgentRole::Escalations,
        1 => AgentRole::Enterprise,
        _ => AgentRole::Core,
    };

    AgentPerformance {
        id: format!("agent_{}", index + 1),
        name: AGENT_NAMES[index % AGENT_NAMES.len()].to_string(),
        region: AGENT_REGIONS[index % AGENT_REGIONS.len()],
        role,
        calls_handled: 320 + index as u32 * 18,
        avg_handle_time: 9 + (index % 5) as u32,
        csat: round1(base + (index % 4) as f64 * 1.2),
        sla: 88 + (index % 6) as u32,
        schedule_adherence: 92 - (index % 5) as u32,
        sentiment_lift: round1((index % 6) as f64 * 0.7 + 1.2),
        focus_areas: FOCUS_AREAS[index % FOCUS_AREAS.len()]
            .iter()
            .map(|focus| focus.to_string())
            .collect(),
    }
}

/// The full agent roster.
pub fn generate_agents() -> Vec<AgentPerformance> {
    (0..AGENT_NAMES.len()).map(generate_agent).collect()
}

/// Leaderboard head shown on the dashboard.
pub fn top_agents(agents: &[AgentPerformance]) -> &[AgentPerformance] {
    &agents[..agents.len().min(6)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_size_and_ids() {
        let agents = generate_agents();
        assert_eq!(agents.len(), 16);
        assert_eq!(agents[0].id, "agent_1");
        assert_eq!(agents[15].id, "agent_16");
        assert_eq!(agents[15].name, "Rin Nakamura");
        assert_eq!(top_agents(&agents).len(), 6);
    }

    #[test]
    fn test_agent_formulas() {
        let first = generate_agent(0);
        assert_eq!(first.csat, 72.0);
        assert_eq!(first.sla, 88);
        assert_eq!(first.calls_handled, 320);
        assert_eq!(first.schedule_adherence, 92);
        assert_eq!(first.sentiment_lift, 1.2);
        assert_eq!(first.role, AgentRole::Escalations);

        let fifth = generate_agent(5);
        // base 87, plus (5 % 4) * 1.2
        assert_eq!(fifth.csat, 88.2);
        assert_eq!(fifth.sla, 93);
        assert_eq!(fifth.avg_handle_time, 9);
        assert_eq!(fifth.sentiment_lift, 4.7);
        assert_eq!(fifth.role, AgentRole::Core);
        assert_eq!(fifth.region, Region::Emea);
        assert_eq!(fifth.focus_areas, vec!["Voice empathy", "Premium accounts"]);
    }
}
