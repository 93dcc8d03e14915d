pub mod failure_policy;
pub mod form_key;
pub mod output_format;
pub mod player_profile;
pub mod player_score_record;
