//! Bundled sample resume, printed by `resume-score sample`

/// A well-structured example resume that scores in the Excellent band
pub const SAMPLE_RESUME: &str = "\
John Doe
Software Engineer | john.doe@email.com | (555) 123-4567 | San Francisco, CA

Professional Summary
Results-driven software engineer with 5+ years of experience building scalable web applications. Passionate about clean code, performance optimization, and mentoring junior developers.

Experience

Senior Software Engineer — Acme Corp
January 2022 – Present
• Led the migration of a monolithic application to microservices, reducing deployment time by 60%
• Architected a real-time notification system serving 50,000+ daily active users
• Mentored a team of 4 junior developers, improving code review turnaround by 35%
• Implemented automated CI/CD pipelines that decreased release cycles from 2 weeks to 3 days
• Optimized database queries, reducing average API response time by 40%

Software Engineer — TechStart Inc.
June 2019 – December 2021
• Designed and built a customer-facing dashboard used by 200+ enterprise clients
• Developed RESTful APIs handling 1 million+ requests per day
• Spearheaded adoption of TypeScript across the frontend codebase, reducing bugs by 25%
• Collaborated with product and design teams to deliver 15+ features on schedule
• Automated data processing workflows, saving the team 10 hours per week

Junior Developer — WebCo Solutions
August 2017 – May 2019
• Built responsive web interfaces using React and modern CSS
• Created unit and integration tests achieving 85% code coverage
• Resolved 200+ customer-reported bugs within SLA timelines
• Streamlined internal tooling that improved developer onboarding time by 30%

Education

Bachelor of Science in Computer Science
University of California, Berkeley — 2017

Skills
• Languages: JavaScript, TypeScript, Python, SQL
• Frameworks: React, Node.js, Express, Next.js
• Tools: Git, Docker, Kubernetes, AWS, PostgreSQL
• Practices: Agile, CI/CD, Code Review, TDD

Certifications
• AWS Certified Solutions Architect – Associate (2023)
• Google Professional Cloud Developer (2022)

Projects
• Open Source CLI Tool — Built a command-line tool for automating project scaffolding with 500+ GitHub stars
• Personal Blog — Developed a JAMstack blog with Next.js and Markdown, achieving 95+ Lighthouse score";
