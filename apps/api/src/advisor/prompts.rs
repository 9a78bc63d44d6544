// All LLM prompt constants for the advisor module.

/// System role for the career recommendation call.
pub const COUNSELOR_SYSTEM: &str = "You are a career counselor for Singaporean students.";

/// System role for the learning-resources call.
pub const RESOURCES_SYSTEM: &str = "You are an expert in education and career guidance.";

pub const RECOMMENDATION_OPENING: &str = "Based on the following academic results, skills, and interests, \
    suggest suitable career paths, relevant universities or institutions, \
    and required certifications for a Singaporean student:";

pub const RECOMMENDATION_CLOSING: &str = "Include relevant details such as industries, \
    potential job roles, and certifications to pursue in Singapore.";

/// Resources prompt template. Replace `{career_goals}` before sending.
pub const RESOURCES_PROMPT_TEMPLATE: &str = "Please suggest relevant and helpful online resources, \
such as online courses, articles, certifications, and platforms, for someone looking to pursue a career in {career_goals}. \
Include up-to-date websites with direct links, platforms, and certifications that can help them advance in this career. \
Ensure all website URLs are correct and provide easy access. For example, you can refer to platforms like: \
\n- [MySkillsFuture](https://www.myskillsfuture.gov.sg) \
\n- [Coursera](https://www.coursera.org) \
\n- [edX](https://www.edx.org) \
Feel free to include any additional, relevant platforms or certifications.";
