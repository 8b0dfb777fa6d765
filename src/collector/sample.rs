//! Label tuples for the user info metric

use crate::pagerduty::User;

/// Label names of `pagerduty_user_info`, in exposition order
pub const USER_INFO_LABELS: [&str; 9] = [
    "userID",
    "userName",
    "userMail",
    "userAvatar",
    "userColor",
    "userJobTitle",
    "userRole",
    "userTimezone",
    "userTeam",
];

/// One `pagerduty_user_info` series; its value is always 1
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserInfoSample {
    pub user_id: String,
    pub user_name: String,
    pub user_mail: String,
    pub user_avatar: String,
    pub user_color: String,
    pub user_job_title: String,
    pub user_role: String,
    pub user_timezone: String,
    /// Comma-joined team summaries
    pub user_team: String,
}

impl UserInfoSample {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            user_mail: user.email.clone(),
            user_avatar: user.avatar_url.clone(),
            user_color: user.color.clone(),
            user_job_title: user.job_title.clone(),
            user_role: user.role.clone(),
            user_timezone: user.time_zone.clone(),
            user_team: user.team_summaries(),
        }
    }

    /// Values matching [`USER_INFO_LABELS`] position by position
    pub fn label_values(&self) -> [&str; 9] {
        [
            self.user_id.as_str(),
            self.user_name.as_str(),
            self.user_mail.as_str(),
            self.user_avatar.as_str(),
            self.user_color.as_str(),
            self.user_job_title.as_str(),
            self.user_role.as_str(),
            self.user_timezone.as_str(),
            self.user_team.as_str(),
        ]
    }

    /// Look up a label value by its exposed name
    pub fn label(&self, name: &str) -> Option<&str> {
        USER_INFO_LABELS
            .iter()
            .position(|label| *label == name)
            .map(|idx| self.label_values()[idx])
    }
}

/// Accumulator for the samples of one collection pass
#[derive(Debug, Clone, Default)]
pub struct UserMetricList {
    samples: Vec<UserInfoSample>,
}

impl UserMetricList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_info(&mut self, sample: UserInfoSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[UserInfoSample] {
        &self.samples
    }
}
