use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::pipeline::domain::{
    ActorIdentity, Candidate, CandidateId, CandidateStatus, HrDecision, Recommendation,
    RejectionRecord, Stage,
};
use crate::pipeline::evaluation::{
    Evaluation, EvaluationId, HrAssessment, InitialAssessment, ManagerAssessment, StageAssessment,
    SystemTaskAssessment, TaskType, TechnicalAssessment,
};
use crate::pipeline::intake::{
    AssessmentDraft, EvaluationDraft, HrDraft, InitialDraft, TechnicalDraft,
};
use crate::pipeline::rating::RatingValue;
use crate::pipeline::repository::{
    AuditEntry, AuditError, AuditSink, PipelineStore, StoreError,
};
use crate::pipeline::service::HiringPipelineService;

pub(super) fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn actor(id: &str, name: &str) -> ActorIdentity {
    ActorIdentity {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub(super) fn candidate(
    id: &str,
    position: &str,
    status: CandidateStatus,
    current_stage: Stage,
    created_at: DateTime<Utc>,
) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        name: format!("Candidate {id}"),
        email: format!("{id}@example.com"),
        phone: "555-0100".to_string(),
        position: position.to_string(),
        experience_years: 4,
        resume_url: None,
        created_at,
        status,
        current_stage,
    }
}

/// Assessment for any stage with every sub-rating set to `score`.
pub(super) fn uniform_assessment(stage: Stage, score: u8) -> StageAssessment {
    match stage {
        Stage::Initial => StageAssessment::Initial(InitialAssessment {
            eligibility_confirmed: true,
            resume_quality: score,
            experience_match: score,
            education_match: score,
            documentation_complete: true,
            background_verified: true,
        }),
        Stage::SystemTask => StageAssessment::SystemTask(SystemTaskAssessment {
            task_type: TaskType::Coding,
            task_description: "Build a rate limiter".to_string(),
            completion_time_minutes: 90,
            code_quality: score,
            problem_solving_approach: score,
            creativity: score,
            test_cases_passed: Some(18),
            total_test_cases: Some(20),
            submission_url: None,
        }),
        Stage::Technical => StageAssessment::Technical(TechnicalAssessment {
            technical_skills: score,
            problem_solving_ability: score,
            coding_skills: score,
            system_design_skills: score,
            architectural_knowledge: score,
            communication_during_technical: score,
            questions_asked: Vec::new(),
            solutions_provided: Vec::new(),
            technical_challenges: Vec::new(),
        }),
        Stage::Manager => StageAssessment::Manager(ManagerAssessment {
            leadership_potential: score,
            team_fit: score,
            decision_making_ability: score,
            domain_expertise: score,
            project_management_skills: score,
            strategic_thinking: score,
            conflict_resolution: score,
            past_projects_discussion: String::new(),
            leadership_examples: String::new(),
        }),
        Stage::Hr => hr_assessment(score, HrDecision::ProceedToOffer),
    }
}

pub(super) fn hr_assessment(score: u8, decision: HrDecision) -> StageAssessment {
    StageAssessment::Hr(HrAssessment {
        culture_fit: score,
        communication_skills: score,
        motivation: score,
        career_aspiration: "Staff engineer".to_string(),
        salary_expectation: 95_000,
        negotiated_salary: None,
        availability_to_join: "4 weeks".to_string(),
        work_from_home_preference: "hybrid".to_string(),
        relocation_willingness: true,
        background_check: true,
        reference_check: true,
        decision,
    })
}

pub(super) fn evaluation(
    id: &str,
    candidate_id: &str,
    interviewer: ActorIdentity,
    assessment: StageAssessment,
    completed_at: Option<DateTime<Utc>>,
) -> Evaluation {
    Evaluation {
        id: EvaluationId(id.to_string()),
        candidate_id: CandidateId(candidate_id.to_string()),
        interviewer,
        is_completed: completed_at.is_some(),
        overall_rating: assessment.overall_rating(),
        recommendation: Recommendation::Hire,
        comments: String::new(),
        strengths: Vec::new(),
        areas_for_improvement: Vec::new(),
        completed_at,
        assessment,
    }
}

pub(super) fn technical_draft(candidate_id: &str, is_completed: bool) -> EvaluationDraft {
    EvaluationDraft {
        candidate_id: CandidateId(candidate_id.to_string()),
        interviewer: actor("int-1", "Priya Raman"),
        is_completed,
        recommendation: Recommendation::Hire,
        comments: "Solid round".to_string(),
        strengths: "Strong SQL, clear communication".to_string(),
        areas_for_improvement: "System design depth".to_string(),
        assessment: AssessmentDraft::Technical(TechnicalDraft {
            technical_skills: RatingValue::Score(5.0),
            problem_solving_ability: RatingValue::Label("Strong".to_string()),
            coding_skills: RatingValue::Score(4.0),
            system_design_skills: RatingValue::Score(3.0),
            architectural_knowledge: RatingValue::Label("Intermediate".to_string()),
            communication_during_technical: RatingValue::Score(5.0),
            questions_asked: vec!["Design a URL shortener".to_string()],
            solutions_provided: Vec::new(),
            technical_challenges: Vec::new(),
        }),
    }
}

pub(super) fn initial_draft(candidate_id: &str) -> EvaluationDraft {
    EvaluationDraft {
        candidate_id: CandidateId(candidate_id.to_string()),
        interviewer: actor("rec-1", "Jordan Blake"),
        is_completed: true,
        recommendation: Recommendation::Hire,
        comments: String::new(),
        strengths: "Relevant experience".to_string(),
        areas_for_improvement: String::new(),
        assessment: AssessmentDraft::Initial(InitialDraft {
            eligibility_confirmed: true,
            resume_quality: RatingValue::Label("Good".to_string()),
            experience_match: RatingValue::Score(4.0),
            education_match: RatingValue::Score(4.0),
            documentation_complete: true,
            background_verified: false,
        }),
    }
}

pub(super) fn hr_draft(candidate_id: &str, decision: HrDecision) -> EvaluationDraft {
    EvaluationDraft {
        candidate_id: CandidateId(candidate_id.to_string()),
        interviewer: actor("hr-1", "Sam Okafor"),
        is_completed: true,
        recommendation: Recommendation::StrongHire,
        comments: String::new(),
        strengths: "Great culture fit".to_string(),
        areas_for_improvement: String::new(),
        assessment: AssessmentDraft::Hr(HrDraft {
            culture_fit: RatingValue::Label("Strong Fit".to_string()),
            communication_skills: RatingValue::Score(4.0),
            motivation: RatingValue::Score(4.0),
            career_aspiration: String::new(),
            salary_expectation: 90_000,
            negotiated_salary: None,
            availability_to_join: "2 weeks".to_string(),
            work_from_home_preference: "remote".to_string(),
            relocation_willingness: false,
            background_check: true,
            reference_check: true,
            decision,
        }),
    }
}

#[derive(Default)]
pub(super) struct MemoryStore {
    pub(super) candidates: Mutex<HashMap<CandidateId, Candidate>>,
    pub(super) evaluations: Mutex<Vec<Evaluation>>,
    pub(super) rejections: Mutex<Vec<RejectionRecord>>,
}

impl MemoryStore {
    pub(super) fn seed_candidate(&self, candidate: Candidate) {
        self.candidates
            .lock()
            .expect("candidate mutex poisoned")
            .insert(candidate.id.clone(), candidate);
    }

    pub(super) fn seed_evaluation(&self, evaluation: Evaluation) {
        self.evaluations
            .lock()
            .expect("evaluation mutex poisoned")
            .push(evaluation);
    }

    pub(super) fn candidate_snapshot(&self, id: &CandidateId) -> Candidate {
        self.candidates
            .lock()
            .expect("candidate mutex poisoned")
            .get(id)
            .cloned()
            .expect("candidate seeded")
    }
}

impl PipelineStore for MemoryStore {
    fn insert_candidate(&self, candidate: Candidate) -> Result<Candidate, StoreError> {
        let mut guard = self.candidates.lock().expect("candidate mutex poisoned");
        if guard.contains_key(&candidate.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(candidate.id.clone(), candidate.clone());
        Ok(candidate)
    }

    fn fetch_candidate(&self, id: &CandidateId) -> Result<Option<Candidate>, StoreError> {
        let guard = self.candidates.lock().expect("candidate mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn fetch_all_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        let guard = self.candidates.lock().expect("candidate mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn update_candidate_progress(
        &self,
        id: &CandidateId,
        stage: Stage,
        status: CandidateStatus,
    ) -> Result<(), StoreError> {
        let mut guard = self.candidates.lock().expect("candidate mutex poisoned");
        let candidate = guard.get_mut(id).ok_or(StoreError::NotFound)?;
        candidate.current_stage = stage;
        candidate.status = status;
        Ok(())
    }

    fn insert_evaluation(&self, evaluation: Evaluation) -> Result<Evaluation, StoreError> {
        let mut guard = self.evaluations.lock().expect("evaluation mutex poisoned");
        guard.push(evaluation.clone());
        Ok(evaluation)
    }

    fn fetch_evaluations(&self, candidate_id: &CandidateId) -> Result<Vec<Evaluation>, StoreError> {
        let guard = self.evaluations.lock().expect("evaluation mutex poisoned");
        Ok(guard
            .iter()
            .filter(|e| &e.candidate_id == candidate_id)
            .cloned()
            .collect())
    }

    fn fetch_all_evaluations(&self) -> Result<Vec<Evaluation>, StoreError> {
        let guard = self.evaluations.lock().expect("evaluation mutex poisoned");
        Ok(guard.clone())
    }

    fn append_rejection(&self, rejection: RejectionRecord) -> Result<(), StoreError> {
        let mut guard = self.rejections.lock().expect("rejection mutex poisoned");
        guard.push(rejection);
        Ok(())
    }

    fn rejections_for(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<Vec<RejectionRecord>, StoreError> {
        let guard = self.rejections.lock().expect("rejection mutex poisoned");
        Ok(guard
            .iter()
            .filter(|r| &r.candidate_id == candidate_id)
            .cloned()
            .collect())
    }
}

/// Store double that fails every call, for error-propagation tests.
pub(super) struct UnavailableStore;

impl PipelineStore for UnavailableStore {
    fn insert_candidate(&self, _candidate: Candidate) -> Result<Candidate, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch_candidate(&self, _id: &CandidateId) -> Result<Option<Candidate>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch_all_candidates(&self) -> Result<Vec<Candidate>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn update_candidate_progress(
        &self,
        _id: &CandidateId,
        _stage: Stage,
        _status: CandidateStatus,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn insert_evaluation(&self, _evaluation: Evaluation) -> Result<Evaluation, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch_evaluations(
        &self,
        _candidate_id: &CandidateId,
    ) -> Result<Vec<Evaluation>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch_all_evaluations(&self) -> Result<Vec<Evaluation>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn append_rejection(&self, _rejection: RejectionRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn rejections_for(
        &self,
        _candidate_id: &CandidateId,
    ) -> Result<Vec<RejectionRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default)]
pub(super) struct MemoryAudit {
    events: Mutex<Vec<AuditEntry>>,
}

impl MemoryAudit {
    pub(super) fn events(&self) -> Vec<AuditEntry> {
        self.events.lock().expect("audit mutex poisoned").clone()
    }
}

impl AuditSink for MemoryAudit {
    fn record(&self, entry: AuditEntry) -> Result<(), AuditError> {
        self.events
            .lock()
            .expect("audit mutex poisoned")
            .push(entry);
        Ok(())
    }
}

pub(super) fn build_service() -> (
    HiringPipelineService<MemoryStore, MemoryAudit>,
    Arc<MemoryStore>,
    Arc<MemoryAudit>,
) {
    let store = Arc::new(MemoryStore::default());
    let audit = Arc::new(MemoryAudit::default());
    let service = HiringPipelineService::new(store.clone(), audit.clone());
    (service, store, audit)
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
