use super::numerology::LifePathNumber;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const BASE_SCORE: i32 = 50;
const MAX_SHARED_LIFE_PATH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub life_path_number: LifePathNumber,
}

impl TeamMember {
    pub fn new(name: impl Into<String>, life_path_number: LifePathNumber) -> Self {
        Self {
            name: name.into(),
            life_path_number,
        }
    }

    fn has_path(&self, paths: &[u8]) -> bool {
        paths.contains(&self.life_path_number.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamCompatibility {
    pub overall: u8,
    pub insights: Vec<String>,
}

/// Scores how well a team's life paths complement each other, 0-100.
pub fn analyze_team_compatibility(members: &[TeamMember]) -> TeamCompatibility {
    if members.len() < 2 {
        return TeamCompatibility {
            overall: BASE_SCORE as u8,
            insights: vec!["Need at least 2 team members for compatibility analysis".to_string()],
        };
    }

    let mut score = BASE_SCORE;
    let mut insights = Vec::new();
    let any = |paths: &[u8]| members.iter().any(|member| member.has_path(paths));

    let masters: Vec<&str> = members
        .iter()
        .filter(|member| member.life_path_number.is_master())
        .map(|member| member.name.as_str())
        .collect();
    if !masters.is_empty() {
        score += 10;
        insights.push(format!(
            "Master number presence ({}) - High spiritual alignment",
            masters.join(", ")
        ));
    }

    if any(&[1, 11]) && any(&[4, 22]) {
        score += 15;
        insights.push("Leadership + Builder balance - Strong execution capability".to_string());
    }

    if any(&[3]) && any(&[7]) {
        score += 10;
        insights.push("Creative + Strategic balance - Innovation with planning".to_string());
    }

    if any(&[8]) {
        score += 10;
        insights.push("Executive presence - Strong manifestation energy".to_string());
    }

    let mut counts: HashMap<LifePathNumber, usize> = HashMap::new();
    for member in members {
        *counts.entry(member.life_path_number).or_default() += 1;
    }
    if counts.values().any(|count| *count > MAX_SHARED_LIFE_PATH) {
        score -= 10;
        insights.push(
            "Multiple members with same Life Path - May create competition or blind spots"
                .to_string(),
        );
    }

    TeamCompatibility {
        overall: score.clamp(0, 100) as u8,
        insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, path: u8) -> TeamMember {
        TeamMember::new(name, LifePathNumber::try_from(path).expect("valid life path"))
    }

    #[test]
    fn small_teams_get_the_neutral_score() {
        let result = analyze_team_compatibility(&[member("Ana", 8)]);
        assert_eq!(result.overall, 50);
        assert_eq!(
            result.insights,
            vec!["Need at least 2 team members for compatibility analysis"]
        );
        assert_eq!(analyze_team_compatibility(&[]).overall, 50);
    }

    #[test]
    fn balanced_team_collects_every_bonus() {
        let team = [
            member("Ana", 11),
            member("Ben", 4),
            member("Cy", 3),
            member("Dee", 7),
            member("Eve", 8),
            member("Fox", 22),
        ];
        let result = analyze_team_compatibility(&team);

        // 50 + 10 + 15 + 10 + 10
        assert_eq!(result.overall, 95);
        assert_eq!(
            result.insights[0],
            "Master number presence (Ana, Fox) - High spiritual alignment"
        );
        assert_eq!(result.insights.len(), 4);
    }

    #[test]
    fn more_than_two_sharing_a_path_is_penalised() {
        let pair = [member("A", 5), member("B", 5)];
        assert_eq!(analyze_team_compatibility(&pair).overall, 50);

        let trio = [member("A", 5), member("B", 5), member("C", 5)];
        let result = analyze_team_compatibility(&trio);
        assert_eq!(result.overall, 40);
        assert_eq!(
            result.insights,
            vec!["Multiple members with same Life Path - May create competition or blind spots"]
        );
    }

    #[test]
    fn members_use_camel_case_keys() {
        let parsed: Vec<TeamMember> =
            serde_json::from_str(r#"[{"name":"Ana","lifePathNumber":33}]"#).expect("parses");
        assert_eq!(parsed[0], member("Ana", 33));

        let invalid: Result<Vec<TeamMember>, _> =
            serde_json::from_str(r#"[{"name":"Ana","lifePathNumber":12}]"#);
        assert!(invalid.is_err());

        let snake_case: Result<Vec<TeamMember>, _> =
            serde_json::from_str(r#"[{"name":"Ana","life_path_number":33}]"#);
        assert!(snake_case.is_err());

        let value = serde_json::to_value(member("Ben", 4)).expect("serializes");
        assert_eq!(value["lifePathNumber"], 4);
    }
}
